//! Virtual tour cards

use leptos::prelude::*;

use super::{Carousel, Icon, ICON_MAP_PIN, ICON_PLAY};
use crate::carousel::CarouselSettings;
use crate::content::VirtualTour;
use crate::sanitize::RawHtmlPolicy;

pub const NO_TOURS: &str = "No virtual tours available.";

#[component]
pub fn VirtualTours(
    tours: Vec<VirtualTour>,
    settings: CarouselSettings,
    policy: RawHtmlPolicy,
) -> impl IntoView {
    let body = if tours.is_empty() {
        view! { <p class="empty-state">{NO_TOURS}</p> }.into_any()
    } else {
        let count = tours.len();
        view! {
            <Carousel
                id="virtual-tour-carousel"
                label="Virtual tours"
                slide_count=count
                settings=settings
            >
                {tours
                    .into_iter()
                    .enumerate()
                    .map(|(idx, tour)| {
                        let label = format!("Start virtual tour of {}", tour.title);
                        let href = policy.href(&tour.tour_url);
                        view! {
                            <div class="carousel-slide" data-slide-index=idx.to_string()>
                                <a
                                    class="tour-card"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=label
                                    data-tour-id=tour.id.to_string()
                                >
                                    <div class="tour-media">
                                        <img
                                            src=tour.thumbnail
                                            alt=tour.title.clone()
                                            loading="lazy"
                                        />
                                        <span class="tour-play">
                                            <Icon path=ICON_PLAY size="28" />
                                        </span>
                                    </div>
                                    <h3 class="tour-title">{tour.title.clone()}</h3>
                                    <p class="tour-location">
                                        <Icon path=ICON_MAP_PIN size="14" />
                                        {tour.location}
                                    </p>
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </Carousel>
        }
        .into_any()
    };

    view! {
        <section id="virtual-tours" class="section virtual-tours">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"See it from home"</p>
                    <h2 class="section-title">"Virtual Tours"</h2>
                </div>
                {body}
            </div>
        </section>
    }
}
