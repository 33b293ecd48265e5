//! # homepage-leptos
//!
//! Leptos SSR renderer for the Mumbai Homes marketing homepage.
//!
//! A single content document (JSON, keyed by section) is resolved into a
//! [`WebsiteContent`] aggregate and rendered into one static HTML page:
//! hero, bank partners, neighborhood links, trending projects, zones,
//! newly launched projects, virtual tours, why-choose-us, FAQs and footer.
//!
//! ## Features
//!
//! - **Pure SSR** - no hydration, a small inline script drives tabs,
//!   modals and carousels
//! - **Explicit missing-data policy** - absent slices fail fast or degrade
//!   to empty, per [`MissingSlicePolicy`]
//! - **Sanitized rich text** - footer HTML passes through
//!   [`sanitize::RawHtmlPolicy`] before reaching the page
//! - **Closed icon sets** - unknown icon names fall back to a generic glyph
//!
//! ## Quick Start
//!
//! ```rust
//! use homepage_leptos::{render_homepage, config::HomepageConfig, content::WebsiteContent};
//!
//! let html = render_homepage(&WebsiteContent::default(), &HomepageConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("No trending projects available."));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - content aggregate, raw document resolution, provider
//! - [`filters`] - listing URLs and trending tab derivation
//! - [`selection`] - zone modal state
//! - [`carousel`] - autoplay/pause state machine
//! - [`enquiry`] - enquiry modal and terms gating
//! - [`sanitize`] - raw HTML policy
//! - [`config`] - `.homepage/config.toml`
//! - [`components`] - Leptos section components
//! - [`styles`] - CSS constants

pub mod carousel;
pub mod components;
pub mod config;
pub mod content;
pub mod enquiry;
pub mod error;
pub mod filters;
pub mod sanitize;
pub mod selection;
pub mod styles;
pub mod view_state;

use std::sync::Arc;

use components::HomepageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

pub use config::HomepageConfig;
pub use content::{ContentProvider, MissingSlicePolicy, WebsiteContent};
pub use error::{ConfigError, ContentError, EnquiryError};
pub use view_state::ViewState;

/// Render the homepage with fresh view state.
///
/// # Example
///
/// ```rust
/// use homepage_leptos::{render_homepage, HomepageConfig, WebsiteContent};
/// use homepage_leptos::content::Faq;
///
/// let content = WebsiteContent {
///     frequently_asked_questions: vec![Faq {
///         id: 1,
///         question: "Do you charge brokerage?".into(),
///         answer: "No.".into(),
///     }],
///     ..Default::default()
/// };
/// let html = render_homepage(&content, &HomepageConfig::default());
/// assert!(html.contains("Do you charge brokerage?"));
/// ```
pub fn render_homepage(content: &WebsiteContent, config: &HomepageConfig) -> String {
    render_document(content, config, &ViewState::new(content))
}

/// Render the homepage with explicit view state.
///
/// The state is reconciled with `content` first, so tabs and the zone modal
/// always describe the snapshot being rendered.
pub fn render_document(
    content: &WebsiteContent,
    config: &HomepageConfig,
    view_state: &ViewState,
) -> String {
    let mut view_state = view_state.clone();
    view_state.sync(content);

    let doc = view! {
        <HomepageDocument
            content=content.clone()
            config=config.clone()
            view_state=view_state
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// A homepage bound to a content provider.
///
/// Keeps view state across renders so a content reload resets the trending
/// tab only when the active location disappeared.
#[derive(Debug)]
pub struct Homepage {
    provider: Arc<ContentProvider>,
    config: HomepageConfig,
    view_state: ViewState,
}

impl Homepage {
    pub fn new(provider: Arc<ContentProvider>, config: HomepageConfig) -> Self {
        let view_state = ViewState::new(&provider.snapshot());
        Self {
            provider,
            config,
            view_state,
        }
    }

    pub fn provider(&self) -> &Arc<ContentProvider> {
        &self.provider
    }

    pub fn config(&self) -> &HomepageConfig {
        &self.config
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view_state
    }

    /// Render against the provider's current snapshot.
    pub fn render(&mut self) -> String {
        let content = self.provider.snapshot();
        self.view_state.sync(&content);
        debug!(
            trending_tab = ?self.view_state.trending.active(),
            zone = ?self.view_state.zone.selected_id(),
            "rendering homepage"
        );
        render_document(&content, &self.config, &self.view_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ICON_LINK, ICON_LINKEDIN};
    use crate::content::{
        Bank, CompanyLink, Faq, FooterContent, NeighborhoodCategory, NeighborhoodItem, Project,
        RawHtml, SocialLink, SocialPlatform, VirtualTour, Zone,
    };
    use crate::sanitize::RawHtmlPolicy;

    fn project(id: u64, name: &str, location: &str) -> Project {
        Project {
            id,
            name: name.into(),
            location: location.into(),
            price: "₹ 1.5 Cr".into(),
            beds: "2 BHK".into(),
            kind: "Apartment".into(),
            image: format!("/img/{id}.jpg"),
        }
    }

    fn zone(id: u64, name: &str) -> Zone {
        Zone {
            id,
            name: name.into(),
            projects: "12 Projects".into(),
            image: format!("/img/zone-{id}.jpg"),
        }
    }

    fn sample() -> WebsiteContent {
        WebsiteContent {
            banks: vec![Bank {
                id: 1,
                name: "HDFC".into(),
                logo: "/img/hdfc.png".into(),
            }],
            discover_neighborhoods: vec![NeighborhoodCategory {
                id: 1,
                title: "Apartments in Andheri".into(),
                items: vec![NeighborhoodItem {
                    id: 1,
                    text: "2 BHK in Andheri".into(),
                    locality: Some("Andheri".into()),
                    bedrooms: Some("2".into()),
                }],
                link: "/all-projects?locality=Andheri".into(),
            }],
            frequently_asked_questions: vec![Faq {
                id: 1,
                question: "Is the listing verified?".into(),
                answer: "Yes, every project is RERA registered.".into(),
            }],
            homes_in_every_zone: vec![zone(1, "Thane"), zone(2, "South Mumbai")],
            trending_projects: vec![
                project(1, "Sea Breeze", "Bandra"),
                project(2, "Hill View", "Andheri"),
                project(3, "Lake Side", "Andheri"),
            ],
            newly_launched: vec![project(4, "Skyline One", "Worli")],
            mumbai_homes: FooterContent {
                logo: "/img/logo.svg".into(),
                title: "Mumbai Homes".into(),
                description: RawHtml::from(
                    "<p>Trusted <b>since</b> 2004</p><script>alert(1)</script>",
                ),
                copyright: RawHtml::from("© 2026 Mumbai Homes"),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// The opening tag of the element carrying `marker`.
    fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html.find(marker).unwrap_or_else(|| panic!("missing {marker}"));
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn renders_empty_homepage_with_fallbacks() {
        let html = render_homepage(&WebsiteContent::default(), &HomepageConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        for fallback in [
            components::NO_BANKS,
            components::NO_CATEGORIES,
            components::NO_TRENDING_PROJECTS,
            components::NO_ZONES,
            components::NO_NEW_LAUNCHES,
            components::NO_TOURS,
            components::NO_FEATURES,
            components::NO_FAQS,
        ] {
            assert!(html.contains(fallback), "missing fallback: {fallback}");
        }
    }

    #[test]
    fn uses_configured_title() {
        let config = HomepageConfig {
            site_title: "Homes in Mumbai".into(),
            ..Default::default()
        };
        let html = render_homepage(&WebsiteContent::default(), &config);
        assert!(html.contains("<title>Homes in Mumbai</title>"));
    }

    #[test]
    fn sections_render_in_order() {
        let html = render_homepage(&sample(), &HomepageConfig::default());
        let order = [
            "id=\"hero\"",
            "id=\"bank-partners\"",
            "id=\"discover-neighborhoods\"",
            "id=\"trending-projects\"",
            "id=\"homes-in-every-zone\"",
            "id=\"newly-launched\"",
            "id=\"virtual-tours\"",
            "id=\"why-choose-us\"",
            "id=\"faqs\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn trending_tabs_are_sorted_and_first_is_active() {
        let html = render_homepage(&sample(), &HomepageConfig::default());
        let andheri = html.find("data-tab=\"Andheri\"").expect("andheri tab");
        let bandra = html.find("data-tab=\"Bandra\"").expect("bandra tab");
        assert!(andheri < bandra);
        let andheri_panel = opening_tag(&html, "data-tab-panel=\"Andheri\"");
        assert!(andheri_panel.contains("class=\"tab-panel active\""));
        assert!(opening_tag(&html, "data-tab-panel=\"Bandra\"").contains("class=\"tab-panel\""));
    }

    #[test]
    fn neighborhood_links_carry_filters() {
        let html = render_homepage(&sample(), &HomepageConfig::default());
        let link = opening_tag(&html, "/all-projects?locality=Andheri&");
        assert!(link.contains("bedrooms=2\""));
        assert!(link.contains("class=\"neighborhood-link\""));
        let panel = opening_tag(&html, "data-tab-panel=\"1\"");
        assert!(panel.contains("class=\"tab-panel active\""));
        assert!(html.contains("View all Apartments in Andheri"));
    }

    #[test]
    fn zone_modal_is_closed_and_links_to_listing() {
        let html = render_homepage(&sample(), &HomepageConfig::default());
        assert!(opening_tag(&html, "data-zone-modal").contains("class=\"zone-modal\""));
        assert!(html.contains("data-zone-select=\"2\""));
        assert!(html.contains("href=\"/all-projects?locality=South%20Mumbai\""));
    }

    #[test]
    fn open_zone_renders_active_panel() {
        let content = sample();
        let mut state = ViewState::new(&content);
        state.zone.select(2);
        let html = render_document(&content, &HomepageConfig::default(), &state);
        assert!(opening_tag(&html, "data-zone-modal").contains("class=\"zone-modal open\""));
        let open_panel = opening_tag(&html, "data-zone-panel=\"2\"");
        assert!(open_panel.contains("class=\"zone-panel active\""));
        assert!(opening_tag(&html, "data-zone-panel=\"1\"").contains("class=\"zone-panel\""));
    }

    #[test]
    fn footer_html_is_sanitized_by_default() {
        let html = render_homepage(&sample(), &HomepageConfig::default());
        assert!(html.contains("<p>Trusted <b>since</b> 2004</p>"));
        assert!(!html.contains("alert(1)"));
    }

    #[test]
    fn footer_html_can_be_escaped() {
        let config = HomepageConfig {
            raw_html: RawHtmlPolicy::Escape,
            ..Default::default()
        };
        let html = render_homepage(&sample(), &config);
        assert!(html.contains("&lt;p&gt;Trusted"));
    }

    #[test]
    fn enquiry_modal_carries_terms_message() {
        let html = render_homepage(&sample(), &HomepageConfig::default());
        assert!(html.contains(&format!(
            "data-terms-message=\"{}\"",
            EnquiryError::TermsNotAccepted
        )));
        assert!(html.contains("data-open-enquiry=\"Sea Breeze\""));
    }

    #[test]
    fn view_state_from_older_content_is_reconciled() {
        let older = WebsiteContent {
            trending_projects: vec![project(1, "Sea Breeze", "Bandra")],
            ..Default::default()
        };
        let current = WebsiteContent {
            trending_projects: vec![project(2, "Hill View", "Andheri")],
            ..Default::default()
        };

        let html = render_document(
            &current,
            &HomepageConfig::default(),
            &ViewState::new(&older),
        );

        assert!(html.contains("data-tab=\"Andheri\""));
        assert!(!html.contains("data-tab=\"Bandra\""));
        assert!(html.contains("Hill View"));
        let panel = opening_tag(&html, "data-tab-panel=\"Andheri\"");
        assert!(panel.contains("class=\"tab-panel active\""));
    }

    #[test]
    fn unsafe_content_links_lose_their_href() {
        let mut content = sample();
        content.mumbai_homes.company_links = vec![
            CompanyLink {
                id: 1,
                text: "About".into(),
                url: "/about".into(),
            },
            CompanyLink {
                id: 2,
                text: "Careers".into(),
                url: "javascript:alert(1)".into(),
            },
        ];
        content.virtual_tours = vec![VirtualTour {
            id: 1,
            title: "Sea Breeze walkthrough".into(),
            tour_url: "JavaScript:alert(2)".into(),
            ..Default::default()
        }];
        content.hero.cta_link = Some("javascript:alert(3)".into());
        content.discover_neighborhoods[0].link = "javascript:alert(4)".into();

        let html = render_homepage(&content, &HomepageConfig::default());

        assert!(html.contains("href=\"/about\""));
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(!html.contains("View all Apartments in Andheri"));
        let hero = &html[html.find("id=\"hero\"").expect("hero")..];
        let hero = &hero[..hero.find("</section>").expect("hero end")];
        assert!(hero.contains("data-open-enquiry"));
    }

    #[test]
    fn trusted_policy_keeps_content_links() {
        let mut content = sample();
        content.mumbai_homes.company_links = vec![CompanyLink {
            id: 1,
            text: "Chat".into(),
            url: "javascript:openChat()".into(),
        }];
        let config = HomepageConfig {
            raw_html: RawHtmlPolicy::Trusted,
            ..Default::default()
        };

        let html = render_homepage(&content, &config);

        assert!(html.contains("href=\"javascript:openChat()\""));
    }

    #[test]
    fn social_icon_falls_back_to_platform_name() {
        let mut content = sample();
        content.mumbai_homes.social_links = vec![SocialLink {
            id: 1,
            platform: "LinkedIn".into(),
            url: "https://www.linkedin.com/company/mumbai-homes".into(),
            icon: SocialPlatform::Other,
        }];

        let html = render_homepage(&content, &HomepageConfig::default());

        assert!(html.contains(ICON_LINKEDIN));
        assert!(!html.contains(ICON_LINK));
    }

    #[test]
    fn reload_resets_only_a_vanished_trending_tab() {
        let provider = Arc::new(ContentProvider::new(sample()));
        let mut page = Homepage::new(Arc::clone(&provider), HomepageConfig::default());
        assert!(page.view_state_mut().trending.activate("Bandra"));
        page.render();
        assert_eq!(page.view_state().trending.active(), Some("Bandra"));

        let mut reloaded = sample();
        reloaded.trending_projects.retain(|p| p.location != "Bandra");
        provider.replace(reloaded);
        let html = page.render();

        assert_eq!(page.view_state().trending.active(), Some("Andheri"));
        assert!(!html.contains("data-tab=\"Bandra\""));
    }
}
