//! Content aggregate consumed by every homepage section.
//!
//! The content document is a single JSON object keyed by section name. Each
//! section owns one slice: usually an ordered list of records carrying a
//! numeric `id`, which the renderer uses as a key and as a lookup value.
//! Uniqueness of ids is assumed, never enforced.
//!
//! Types here are:
//!
//! - **Serializable** - camelCase JSON in and out via serde
//! - **Clone-friendly** - components take owned slices
//! - **Default-able** - empty slices are valid and render a fallback
//!
//! # Example
//!
//! ```rust
//! use homepage_leptos::content::{Project, WebsiteContent};
//!
//! let content = WebsiteContent {
//!     trending_projects: vec![Project {
//!         id: 1,
//!         name: "Sea Breeze".into(),
//!         location: "Bandra".into(),
//!         price: "₹ 3.2 Cr".into(),
//!         beds: "3 BHK".into(),
//!         kind: "Apartment".into(),
//!         image: "/img/sea-breeze.jpg".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.trending_projects.len(), 1);
//! ```

mod provider;
mod raw;

pub use provider::ContentProvider;
pub use raw::{MissingSlicePolicy, RawContent, SectionKey};

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier carried by every record.
pub type RecordId = u64;

/// The resolved content aggregate: every slice is present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteContent {
    /// Hero banner copy
    #[serde(default)]
    pub hero: Hero,
    /// Partner banks offering home loans
    pub banks: Vec<Bank>,
    /// Neighborhood categories with generated filter links
    pub discover_neighborhoods: Vec<NeighborhoodCategory>,
    /// FAQ accordion entries
    pub frequently_asked_questions: Vec<Faq>,
    /// City zones with a project summary each
    pub homes_in_every_zone: Vec<Zone>,
    /// Footer brand block, links and legal copy
    pub mumbai_homes: FooterContent,
    /// Recently launched projects carousel
    pub newly_launched: Vec<Project>,
    /// Trending projects, grouped by location tab
    pub trending_projects: Vec<Project>,
    /// Virtual tour cards
    #[serde(default)]
    pub virtual_tours: Vec<VirtualTour>,
    /// Feature grid with illustrations
    pub why_choose_us: WhyChooseUs,
}

/// Hero banner copy. Falls back to built-in text when the slice is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub background_image: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Find your next home in Mumbai".into(),
            subtitle: "Verified projects from trusted developers, in every zone of the city."
                .into(),
            background_image: None,
            cta_text: None,
            cta_link: None,
        }
    }
}

/// A partner bank.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: RecordId,
    pub name: String,
    /// Remote URL or inline `data:` image
    pub logo: String,
}

/// A neighborhood category, e.g. "Popular localities".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodCategory {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<NeighborhoodItem>,
    /// "View all" target for the category
    #[serde(default)]
    pub link: String,
}

/// One filter entry inside a neighborhood category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodItem {
    pub id: RecordId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// Accepts `"2"` or `2` in the document
    #[serde(
        default,
        deserialize_with = "opt_text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub bedrooms: Option<String>,
}

impl NeighborhoodItem {
    /// Listing URL filtered by this item's locality and bedroom count.
    pub fn filter_url(&self) -> String {
        crate::filters::build_filter_url(self.locality.as_deref(), self.bedrooms.as_deref())
    }
}

/// A question/answer pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: RecordId,
    pub question: String,
    pub answer: String,
}

/// A city zone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: RecordId,
    pub name: String,
    /// Free-text summary such as "120+ projects", not a count
    #[serde(deserialize_with = "text_or_number")]
    pub projects: String,
    pub image: String,
}

/// A project card shown in the trending and newly launched carousels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    #[serde(deserialize_with = "text_or_number")]
    pub beds: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
}

/// A virtual tour card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualTour {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub thumbnail: String,
    pub tour_url: String,
}

/// The "why choose us" block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyChooseUs {
    pub title: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handshake_image: Option<String>,
}

/// One feature tile; `icon` is resolved to a glyph by [`FeatureIcon`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: RecordId,
    #[serde(default)]
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
}

/// Closed set of feature glyphs.
///
/// Unknown names deserialize to [`FeatureIcon::Other`], which renders a
/// neutral glyph instead of nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureIcon {
    #[serde(alias = "ShieldCheck", alias = "shield")]
    ShieldCheck,
    #[serde(alias = "Home", alias = "house")]
    Home,
    #[serde(alias = "Users")]
    Users,
    #[serde(alias = "Award", alias = "trophy")]
    Award,
    #[serde(alias = "Building", alias = "building-2")]
    Building,
    #[serde(alias = "Handshake")]
    Handshake,
    #[serde(alias = "Headset", alias = "headphones")]
    Headset,
    #[serde(alias = "TrendingUp")]
    TrendingUp,
    #[serde(alias = "Key")]
    Key,
    #[serde(alias = "MapPin")]
    MapPin,
    #[default]
    #[serde(other)]
    Other,
}

/// Footer content (the `mumbaiHomes` slice).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub logo: String,
    pub title: String,
    pub description: RawHtml,
    #[serde(default)]
    pub company_links: Vec<CompanyLink>,
    pub disclaimer: RawHtml,
    pub copyright: RawHtml,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyLink {
    pub id: RecordId,
    pub text: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: RecordId,
    /// Display name, used as the accessible label
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: SocialPlatform,
}

impl SocialLink {
    /// Glyph to draw: the explicit `icon`, else whatever `platform` names.
    pub fn platform_icon(&self) -> SocialPlatform {
        match self.icon {
            SocialPlatform::Other => SocialPlatform::from_name(&self.platform),
            icon => icon,
        }
    }
}

/// Closed set of social glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    #[serde(alias = "Facebook")]
    Facebook,
    #[serde(alias = "Instagram")]
    Instagram,
    #[serde(alias = "Twitter", alias = "x", alias = "X")]
    Twitter,
    #[serde(alias = "LinkedIn", alias = "Linkedin")]
    Linkedin,
    #[serde(alias = "YouTube", alias = "Youtube")]
    Youtube,
    #[serde(alias = "WhatsApp", alias = "Whatsapp")]
    Whatsapp,
    #[default]
    #[serde(other)]
    Other,
}

impl SocialPlatform {
    /// Case-insensitive lookup by display name ("LinkedIn", "X", "YouTube").
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "facebook" => SocialPlatform::Facebook,
            "instagram" => SocialPlatform::Instagram,
            "twitter" | "x" => SocialPlatform::Twitter,
            "linkedin" => SocialPlatform::Linkedin,
            "youtube" => SocialPlatform::Youtube,
            "whatsapp" => SocialPlatform::Whatsapp,
            _ => SocialPlatform::Other,
        }
    }
}

/// Markup supplied by the content source.
///
/// Never injected directly: components route it through
/// [`crate::sanitize::RawHtmlPolicy`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawHtml(pub String);

impl RawHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for RawHtml {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Int(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TextOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(String::from))
}
