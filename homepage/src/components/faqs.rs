//! FAQ accordion

use leptos::prelude::*;

use super::{Icon, ICON_CARET_DOWN};
use crate::content::Faq;

pub const NO_FAQS: &str = "No FAQs available.";

/// Accordion built on `<details>`, so it works without the script
#[component]
pub fn FrequentlyAskedQuestions(faqs: Vec<Faq>) -> impl IntoView {
    let body = if faqs.is_empty() {
        view! { <p class="empty-state">{NO_FAQS}</p> }.into_any()
    } else {
        view! {
            <div class="faq-list">
                {faqs
                    .into_iter()
                    .map(|faq| {
                        view! {
                            <details class="faq-item" data-faq-id=faq.id.to_string()>
                                <summary class="faq-question">
                                    <span>{faq.question}</span>
                                    <Icon path=ICON_CARET_DOWN size="16" class="faq-caret" />
                                </summary>
                                <div class="faq-answer">{faq.answer}</div>
                            </details>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="faqs" class="section faqs">
            <div class="container narrow">
                <div class="section-header">
                    <p class="section-eyebrow">"Questions"</p>
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </div>
                {body}
            </div>
        </section>
    }
}
