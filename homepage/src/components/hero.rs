use leptos::prelude::*;

use crate::content::Hero;
use crate::filters::LISTING_PATH;
use crate::sanitize::RawHtmlPolicy;

#[component]
pub fn HeroBanner(hero: Hero, policy: RawHtmlPolicy) -> impl IntoView {
    let style = hero
        .background_image
        .as_deref()
        .map(|image| format!("background-image: url('{}')", css_url(image)))
        .unwrap_or_default();
    let cta_text = hero.cta_text.unwrap_or_else(|| "Enquire now".to_string());

    // an unusable link falls back to opening the enquiry modal
    let cta = match hero.cta_link.as_deref().and_then(|link| policy.href(link)) {
        Some(link) => view! { <a href=link class="btn btn-primary">{cta_text}</a> }.into_any(),
        None => view! {
            <button class="btn btn-primary" data-open-enquiry="">{cta_text}</button>
        }
        .into_any(),
    };

    view! {
        <section id="hero" class="hero" style=style>
            <div class="hero-overlay"></div>
            <div class="container hero-content">
                <p class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    "Mumbai Homes"
                </p>
                <h1 class="hero-title">{hero.title}</h1>
                <p class="hero-description">{hero.subtitle}</p>
                <div class="hero-actions">
                    {cta}
                    <a href=LISTING_PATH class="btn btn-secondary">"Browse all projects →"</a>
                </div>
            </div>
        </section>
    }
}

/// Percent-encode the characters that would end a CSS `url('…')`.
fn css_url(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '\'' => "%27".to_string(),
            '"' => "%22".to_string(),
            '(' => "%28".to_string(),
            ')' => "%29".to_string(),
            '\\' => "%5C".to_string(),
            other => other.to_string(),
        })
        .collect()
}
