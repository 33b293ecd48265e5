//! Project carousels: trending (grouped by location tab) and newly launched

use leptos::prelude::*;

use super::{Carousel, Icon, ICON_BED, ICON_MAP_PIN};
use crate::carousel::CarouselSettings;
use crate::content::Project;
use crate::filters::{filter_by_location, TrendingTabs};

pub const NO_TRENDING_PROJECTS: &str = "No trending projects available.";
pub const NO_NEW_LAUNCHES: &str = "No newly launched projects available.";

/// A single project card
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        id,
        name,
        location,
        price,
        beds,
        kind,
        image,
    } = project;

    view! {
        <article class="project-card" data-project-id=id.to_string()>
            <div class="project-media">
                <img class="project-image" src=image alt=name.clone() loading="lazy" />
                <span class="project-type">{kind}</span>
            </div>
            <div class="project-body">
                <h3 class="project-name">{name.clone()}</h3>
                <p class="project-location">
                    <Icon path=ICON_MAP_PIN size="14" />
                    {location}
                </p>
                <div class="project-meta">
                    <span class="project-beds">
                        <Icon path=ICON_BED size="14" />
                        {beds}
                    </span>
                    <span class="project-price">{price}</span>
                </div>
                <button class="btn btn-outline" data-open-enquiry=name>
                    "Enquire now"
                </button>
            </div>
        </article>
    }
}

fn project_slides(projects: Vec<Project>) -> Vec<impl IntoView> {
    projects
        .into_iter()
        .enumerate()
        .map(|(idx, project)| {
            view! {
                <div class="carousel-slide" data-slide-index=idx.to_string()>
                    <ProjectCard project=project />
                </div>
            }
        })
        .collect()
}

/// Trending projects with one tab per location
#[component]
pub fn TrendingProjects(
    projects: Vec<Project>,
    tabs: TrendingTabs,
    settings: CarouselSettings,
) -> impl IntoView {
    let body = if tabs.labels().is_empty() {
        view! { <p class="empty-state">{NO_TRENDING_PROJECTS}</p> }.into_any()
    } else {
        let active = tabs.active().map(str::to_owned);
        let buttons = tabs
            .labels()
            .iter()
            .map(|label| {
                let is_active = active.as_deref() == Some(label.as_str());
                let class = if is_active { "tab-btn active" } else { "tab-btn" };
                let selected = if is_active { "true" } else { "false" };
                view! {
                    <button
                        class=class
                        role="tab"
                        aria-selected=selected
                        data-tab=label.clone()
                    >
                        {label.clone()}
                    </button>
                }
            })
            .collect::<Vec<_>>();

        let panels = tabs
            .labels()
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let class = if active.as_deref() == Some(label.as_str()) {
                    "tab-panel active"
                } else {
                    "tab-panel"
                };
                let visible = filter_by_location(&projects, label)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>();
                let count = visible.len();
                view! {
                    <div
                        class=class
                        role="tabpanel"
                        data-tab-panel=label.clone()
                    >
                        <Carousel
                            id=format!("trending-carousel-{}", idx)
                            label=format!("Trending projects in {}", label)
                            slide_count=count
                            settings=settings
                        >
                            {project_slides(visible)}
                        </Carousel>
                    </div>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="tab-bar" role="tablist" data-tab-scope="trending">{buttons}</div>
            <div class="tab-panels" data-tab-scope="trending">{panels}</div>
        }
        .into_any()
    };

    view! {
        <section id="trending-projects" class="section trending-projects">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Hot right now"</p>
                    <h2 class="section-title">"Trending Projects"</h2>
                </div>
                {body}
            </div>
        </section>
    }
}

/// Newly launched projects carousel
#[component]
pub fn NewlyLaunched(projects: Vec<Project>, settings: CarouselSettings) -> impl IntoView {
    let body = if projects.is_empty() {
        view! { <p class="empty-state">{NO_NEW_LAUNCHES}</p> }.into_any()
    } else {
        let count = projects.len();
        view! {
            <Carousel
                id="newly-launched-carousel"
                label="Newly launched projects"
                slide_count=count
                settings=settings
            >
                {project_slides(projects)}
            </Carousel>
        }
        .into_any()
    };

    view! {
        <section id="newly-launched" class="section newly-launched">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Just launched"</p>
                    <h2 class="section-title">"Newly Launched Projects"</h2>
                </div>
                {body}
            </div>
        </section>
    }
}
