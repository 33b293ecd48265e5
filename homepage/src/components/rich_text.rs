//! Content-supplied markup, rendered under the configured policy

use leptos::prelude::*;

use crate::content::RawHtml;
use crate::sanitize::{RawHtmlPolicy, RichContent};

/// Block of markup from the content source. Renders nothing when blank.
#[component]
pub fn RichText(html: RawHtml, policy: RawHtmlPolicy, class: &'static str) -> impl IntoView {
    if html.is_empty() {
        return view! { "" }.into_any();
    }

    match policy.prepare(&html) {
        RichContent::Markup(markup) => {
            view! { <div class=class inner_html=markup></div> }.into_any()
        }
        RichContent::Text(text) => view! { <div class=class>{text}</div> }.into_any(),
    }
}
