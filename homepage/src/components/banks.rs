//! Bank partners strip

use leptos::prelude::*;

use super::Carousel;
use crate::carousel::CarouselSettings;
use crate::content::Bank;

pub const NO_BANKS: &str = "No bank partners available.";

#[component]
pub fn BankPartners(banks: Vec<Bank>, settings: CarouselSettings) -> impl IntoView {
    let body = if banks.is_empty() {
        view! { <p class="empty-state">{NO_BANKS}</p> }.into_any()
    } else {
        let count = banks.len();
        view! {
            <Carousel id="bank-carousel" label="Partner banks" slide_count=count settings=settings>
                {banks
                    .into_iter()
                    .enumerate()
                    .map(|(idx, bank)| {
                        view! {
                            <div class="carousel-slide bank-slide" data-slide-index=idx.to_string()>
                                <img
                                    class="bank-logo"
                                    src=bank.logo
                                    alt=bank.name.clone()
                                    title=bank.name
                                    loading="lazy"
                                />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </Carousel>
        }
        .into_any()
    };

    view! {
        <section id="bank-partners" class="section banks">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Home loans"</p>
                    <h2 class="section-title">"Our Bank Partners"</h2>
                </div>
                {body}
            </div>
        </section>
    }
}
