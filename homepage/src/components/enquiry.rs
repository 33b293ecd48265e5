//! Enquiry modal markup
//!
//! The form is submitted by the page script, which applies the same consent
//! rule as [`EnquiryModal::submit`] and reuses its message.

use leptos::prelude::*;

use super::{Icon, ICON_CLOSE};
use crate::enquiry::EnquiryModal;
use crate::error::EnquiryError;

#[component]
pub fn EnquiryDialog(modal: EnquiryModal) -> impl IntoView {
    let class = if modal.is_open() {
        "enquiry-modal open"
    } else {
        "enquiry-modal"
    };
    let hidden = if modal.is_open() { "false" } else { "true" };
    let project = modal.project().unwrap_or_default().to_string();
    let terms_message = EnquiryError::TermsNotAccepted.to_string();

    view! {
        <div
            class=class
            data-enquiry-modal="true"
            data-terms-message=terms_message
            role="dialog"
            aria-modal="true"
            aria-labelledby="enquiry-title"
            aria-hidden=hidden
        >
            <div class="enquiry-dialog">
                <button class="modal-close" data-enquiry-close="true" aria-label="Close">
                    <Icon path=ICON_CLOSE size="18" />
                </button>
                <h2 id="enquiry-title">"Enquire now"</h2>
                <p class="enquiry-project" data-enquiry-project="true">{project}</p>
                <form class="enquiry-form" data-enquiry-form="true">
                    <label>
                        <span>"Name"</span>
                        <input type="text" name="username" autocomplete="name" />
                    </label>
                    <label>
                        <span>"Phone"</span>
                        <input type="tel" name="phone" autocomplete="tel" />
                    </label>
                    <label>
                        <span>"Email"</span>
                        <input type="email" name="email" autocomplete="email" />
                    </label>
                    <label>
                        <span>"Message"</span>
                        <textarea name="message" rows="3"></textarea>
                    </label>
                    <label class="terms">
                        <input type="checkbox" name="agreedToTerms" />
                        <span>"I agree to the terms and conditions"</span>
                    </label>
                    <p class="form-error" data-enquiry-error="true" role="alert"></p>
                    <button type="submit" class="btn btn-primary">"Submit"</button>
                </form>
            </div>
        </div>
    }
}
