//! Why choose us: feature grid with optional illustrations

use leptos::prelude::*;

use super::Icon;
use crate::content::{Feature, WhyChooseUs};

pub const NO_FEATURES: &str = "No features available.";

#[component]
pub fn WhyChooseUsSection(content: WhyChooseUs) -> impl IntoView {
    let WhyChooseUs {
        title,
        features,
        building_image,
        handshake_image,
    } = content;

    let grid = if features.is_empty() {
        view! { <p class="empty-state">{NO_FEATURES}</p> }.into_any()
    } else {
        view! {
            <div class="features-grid">
                {features
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature /> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="why-choose-us" class="section why-choose-us">
            <div class="container why-layout">
                <div class="why-copy">
                    <h2 class="section-title">{title}</h2>
                    {grid}
                </div>
                <div class="why-art">
                    {building_image.map(|src| view! {
                        <img class="why-building" src=src alt="" loading="lazy" />
                    })}
                    {handshake_image.map(|src| view! {
                        <img class="why-handshake" src=src alt="" loading="lazy" />
                    })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card" data-feature-id=feature.id.to_string()>
            <div class="feature-icon">
                <Icon path=feature.icon.glyph() size="28" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
