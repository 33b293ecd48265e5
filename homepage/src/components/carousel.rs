//! Carousel shell shared by the project, bank and tour sections.
//!
//! Slides are rendered in input order. The browser script reads the data
//! attributes for autoplay timing and re-counts slides on every tick, so a
//! changed collection re-initialises instead of breaking.

use leptos::prelude::*;

use super::{Icon, ICON_CARET_LEFT, ICON_CARET_RIGHT};
use crate::carousel::{CarouselSettings, CarouselState};

/// Autoplaying, looping carousel. Each child should be one `.carousel-slide`.
#[component]
pub fn Carousel(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    slide_count: usize,
    settings: CarouselSettings,
    children: Children,
) -> impl IntoView {
    let state = CarouselState::new(slide_count, settings);
    let settings = state.settings();
    let has_controls = state.len() > 1;

    view! {
        <div
            id=id
            class="carousel"
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            data-carousel="true"
            data-index=state.index().to_string()
            data-slide-count=state.len().to_string()
            data-autoplay-ms=settings.autoplay.as_millis().to_string()
            data-resume-after-ms=settings.resume_after.as_millis().to_string()
        >
            {has_controls.then(|| view! {
                <button
                    class="carousel-nav prev"
                    data-carousel-prev="true"
                    aria-label="Previous slide"
                >
                    <Icon path=ICON_CARET_LEFT size="18" />
                </button>
            })}
            <div class="carousel-viewport">
                <div class="carousel-track">{children()}</div>
            </div>
            {has_controls.then(|| view! {
                <button class="carousel-nav next" data-carousel-next="true" aria-label="Next slide">
                    <Icon path=ICON_CARET_RIGHT size="18" />
                </button>
            })}
        </div>
    }
}
