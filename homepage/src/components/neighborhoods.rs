//! Discover neighborhoods: category tabs with generated listing filter links

use leptos::prelude::*;

use crate::content::NeighborhoodCategory;
use crate::sanitize::RawHtmlPolicy;

pub const NO_CATEGORIES: &str = "No categories available.";

#[component]
pub fn DiscoverNeighborhoods(
    categories: Vec<NeighborhoodCategory>,
    policy: RawHtmlPolicy,
) -> impl IntoView {
    let body = if categories.is_empty() {
        view! { <p class="empty-state">{NO_CATEGORIES}</p> }.into_any()
    } else {
        let buttons = categories
            .iter()
            .enumerate()
            .map(|(idx, category)| {
                let class = if idx == 0 { "tab-btn active" } else { "tab-btn" };
                view! {
                    <button class=class role="tab" data-tab=category.id.to_string()>
                        {category.title.clone()}
                    </button>
                }
            })
            .collect::<Vec<_>>();

        let panels = categories
            .into_iter()
            .enumerate()
            .map(|(idx, category)| {
                let class = if idx == 0 { "tab-panel active" } else { "tab-panel" };
                let panel_id = category.id.to_string();
                view! {
                    <div class=class role="tabpanel" data-tab-panel=panel_id>
                        <CategoryLinks category=category policy=policy />
                    </div>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="tab-bar" role="tablist" data-tab-scope="neighborhoods">{buttons}</div>
            <div class="tab-panels" data-tab-scope="neighborhoods">{panels}</div>
        }
        .into_any()
    };

    view! {
        <section id="discover-neighborhoods" class="section neighborhoods">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Neighborhoods"</p>
                    <h2 class="section-title">"Discover Your Neighborhood"</h2>
                </div>
                {body}
            </div>
        </section>
    }
}

#[component]
fn CategoryLinks(category: NeighborhoodCategory, policy: RawHtmlPolicy) -> impl IntoView {
    let links = category
        .items
        .iter()
        .map(|item| {
            view! {
                <li>
                    <a class="neighborhood-link" href=item.filter_url()>{item.text.clone()}</a>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let view_all = policy.href(&category.link).map(|href| {
        view! {
            <a class="view-all" href=href>
                {format!("View all {}", category.title)}
            </a>
        }
    });

    view! {
        <ul class="neighborhood-links">{links}</ul>
        {view_all}
    }
}
