use leptos::prelude::*;

use super::{Icon, RichText};
use crate::content::FooterContent;
use crate::sanitize::RawHtmlPolicy;

#[component]
pub fn SiteFooter(footer: FooterContent, policy: RawHtmlPolicy) -> impl IntoView {
    let FooterContent {
        logo,
        title,
        description,
        company_links,
        disclaimer,
        copyright,
        social_links,
    } = footer;

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img class="footer-logo" src=logo alt=title.clone() />
                    <span class="footer-title">{title}</span>
                    <RichText html=description policy=policy class="footer-description" />
                </div>
                <nav class="footer-links" aria-label="Company">
                    <h4>"Company"</h4>
                    <ul>
                        {company_links
                            .into_iter()
                            .map(|link| {
                                let href = policy.href(&link.url);
                                view! {
                                    <li><a href=href class="footer-link">{link.text}</a></li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
                <div class="footer-social">
                    <h4>"Follow us"</h4>
                    <div class="social-links">
                        {social_links
                            .into_iter()
                            .map(|link| {
                                let href = policy.href(&link.url);
                                let glyph = link.platform_icon().glyph();
                                view! {
                                    <a
                                        href=href
                                        class="social-link"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.platform
                                    >
                                        <Icon path=glyph size="18" />
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
            <div class="container footer-legal">
                <RichText html=disclaimer policy=policy class="footer-disclaimer" />
                <RichText html=copyright policy=policy class="footer-copyright" />
            </div>
        </footer>
    }
}
