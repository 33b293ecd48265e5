//! Leptos UI components for rendering the homepage.
//!
//! Every section is a `#[component]` that takes owned content records and
//! renders static markup. Browser behaviour is attached by the inline
//! script in [`HomepageDocument`] through `data-*` attributes.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomepageDocument
//! ├── HeroBanner
//! ├── BankPartners
//! │   └── Carousel
//! ├── DiscoverNeighborhoods
//! ├── TrendingProjects
//! │   └── Carousel (one per location tab)
//! │       └── ProjectCard
//! ├── HomesInEveryZone
//! │   └── ZoneDetail (one per zone, sidebar of the others)
//! ├── NewlyLaunched
//! │   └── Carousel
//! │       └── ProjectCard
//! ├── VirtualTours
//! │   └── Carousel
//! ├── WhyChooseUsSection
//! ├── FrequentlyAskedQuestions
//! ├── SiteFooter
//! │   └── RichText
//! └── EnquiryDialog
//! ```
//!
//! # Usage
//!
//! Components are normally used through [`crate::render_homepage`], but
//! sections can be rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use homepage_leptos::components::FrequentlyAskedQuestions;
//!
//! view! { <FrequentlyAskedQuestions faqs=content.frequently_asked_questions /> }
//! ```

mod banks;
mod carousel;
mod document;
mod enquiry;
mod faqs;
mod footer;
mod hero;
mod icons;
mod neighborhoods;
mod projects;
mod rich_text;
mod virtual_tours;
mod why_choose_us;
mod zones;

pub use banks::{BankPartners, NO_BANKS};
pub use carousel::Carousel;
pub use document::HomepageDocument;
pub use enquiry::EnquiryDialog;
pub use faqs::{FrequentlyAskedQuestions, NO_FAQS};
pub use footer::SiteFooter;
pub use hero::HeroBanner;
pub use icons::*;
pub use neighborhoods::{DiscoverNeighborhoods, NO_CATEGORIES};
pub use projects::{
    NewlyLaunched, ProjectCard, TrendingProjects, NO_NEW_LAUNCHES, NO_TRENDING_PROJECTS,
};
pub use rich_text::RichText;
pub use virtual_tours::{VirtualTours, NO_TOURS};
pub use why_choose_us::{WhyChooseUsSection, NO_FEATURES};
pub use zones::{HomesInEveryZone, NO_ZONES};
