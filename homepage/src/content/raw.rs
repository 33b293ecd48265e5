//! The content document as loaded, before missing slices are resolved.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    Bank, Faq, FooterContent, Hero, NeighborhoodCategory, Project, VirtualTour, WebsiteContent,
    WhyChooseUs, Zone,
};
use crate::error::ContentError;

/// What to do when the document lacks a section slice.
///
/// The decision applies uniformly to every section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingSlicePolicy {
    /// Refuse the document and name every absent slice.
    #[default]
    FailFast,
    /// Substitute an empty slice; the section renders its fallback text.
    Degrade,
}

/// Section keys of the content document, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    Banks,
    DiscoverNeighborhoods,
    FrequentlyAskedQuestions,
    HomesInEveryZone,
    MumbaiHomes,
    NewlyLaunched,
    TrendingProjects,
    WhyChooseUs,
}

impl SectionKey {
    /// Slices every document must carry.
    pub const REQUIRED: [SectionKey; 8] = [
        SectionKey::Banks,
        SectionKey::DiscoverNeighborhoods,
        SectionKey::FrequentlyAskedQuestions,
        SectionKey::HomesInEveryZone,
        SectionKey::MumbaiHomes,
        SectionKey::NewlyLaunched,
        SectionKey::TrendingProjects,
        SectionKey::WhyChooseUs,
    ];

    /// JSON key of the slice.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Banks => "banks",
            SectionKey::DiscoverNeighborhoods => "discoverNeighborhoods",
            SectionKey::FrequentlyAskedQuestions => "frequentlyAskedQuestions",
            SectionKey::HomesInEveryZone => "homesInEveryZone",
            SectionKey::MumbaiHomes => "mumbaiHomes",
            SectionKey::NewlyLaunched => "newlyLaunched",
            SectionKey::TrendingProjects => "trendingProjects",
            SectionKey::WhyChooseUs => "whyChooseUs",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content document with every slice optional.
///
/// `hero` and `virtualTours` always degrade to defaults; the other slices
/// follow the [`MissingSlicePolicy`] passed to [`RawContent::resolve`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    pub hero: Option<Hero>,
    pub banks: Option<Vec<Bank>>,
    pub discover_neighborhoods: Option<Vec<NeighborhoodCategory>>,
    pub frequently_asked_questions: Option<Vec<Faq>>,
    pub homes_in_every_zone: Option<Vec<Zone>>,
    pub mumbai_homes: Option<FooterContent>,
    pub newly_launched: Option<Vec<Project>>,
    pub trending_projects: Option<Vec<Project>>,
    pub virtual_tours: Option<Vec<VirtualTour>>,
    pub why_choose_us: Option<WhyChooseUs>,
}

impl RawContent {
    /// Parse a JSON content document.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Required slices absent from the document, in page order.
    pub fn missing_slices(&self) -> Vec<SectionKey> {
        SectionKey::REQUIRED
            .into_iter()
            .filter(|key| !self.has(*key))
            .collect()
    }

    fn has(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Banks => self.banks.is_some(),
            SectionKey::DiscoverNeighborhoods => self.discover_neighborhoods.is_some(),
            SectionKey::FrequentlyAskedQuestions => self.frequently_asked_questions.is_some(),
            SectionKey::HomesInEveryZone => self.homes_in_every_zone.is_some(),
            SectionKey::MumbaiHomes => self.mumbai_homes.is_some(),
            SectionKey::NewlyLaunched => self.newly_launched.is_some(),
            SectionKey::TrendingProjects => self.trending_projects.is_some(),
            SectionKey::WhyChooseUs => self.why_choose_us.is_some(),
        }
    }

    /// Produce a complete aggregate under `policy`.
    pub fn resolve(self, policy: MissingSlicePolicy) -> Result<WebsiteContent, ContentError> {
        let missing = self.missing_slices();
        if !missing.is_empty() {
            match policy {
                MissingSlicePolicy::FailFast => return Err(ContentError::MissingSlices(missing)),
                MissingSlicePolicy::Degrade => {
                    for key in &missing {
                        warn!(slice = %key, "content slice missing, rendering empty section");
                    }
                }
            }
        }

        Ok(WebsiteContent {
            hero: self.hero.unwrap_or_default(),
            banks: self.banks.unwrap_or_default(),
            discover_neighborhoods: self.discover_neighborhoods.unwrap_or_default(),
            frequently_asked_questions: self.frequently_asked_questions.unwrap_or_default(),
            homes_in_every_zone: self.homes_in_every_zone.unwrap_or_default(),
            mumbai_homes: self.mumbai_homes.unwrap_or_default(),
            newly_launched: self.newly_launched.unwrap_or_default(),
            trending_projects: self.trending_projects.unwrap_or_default(),
            virtual_tours: self.virtual_tours.unwrap_or_default(),
            why_choose_us: self.why_choose_us.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PARTIAL: &str = r#"{
        "banks": [{"id": 1, "name": "HDFC", "logo": "https://cdn/hdfc.png"}],
        "frequentlyAskedQuestions": [],
        "trendingProjects": []
    }"#;

    #[test]
    fn fail_fast_names_every_missing_slice() {
        let raw = RawContent::from_json(PARTIAL).expect("parse");
        let err = raw.resolve(MissingSlicePolicy::FailFast).unwrap_err();

        match err {
            ContentError::MissingSlices(keys) => assert_eq!(
                keys,
                vec![
                    SectionKey::DiscoverNeighborhoods,
                    SectionKey::HomesInEveryZone,
                    SectionKey::MumbaiHomes,
                    SectionKey::NewlyLaunched,
                    SectionKey::WhyChooseUs,
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fail_fast_error_message_lists_json_keys() {
        let raw = RawContent::from_json(r#"{"banks": []}"#).expect("parse");
        let message = raw
            .resolve(MissingSlicePolicy::FailFast)
            .unwrap_err()
            .to_string();

        assert!(message.contains("discoverNeighborhoods"));
        assert!(message.contains("whyChooseUs"));
        assert!(!message.contains("banks,"));
    }

    #[test]
    fn degrade_substitutes_empty_slices() {
        let raw = RawContent::from_json(PARTIAL).expect("parse");
        let content = raw.resolve(MissingSlicePolicy::Degrade).expect("resolve");

        assert_eq!(content.banks.len(), 1);
        assert!(content.homes_in_every_zone.is_empty());
        assert!(content.why_choose_us.features.is_empty());
        assert_eq!(content.hero, Hero::default());
    }

    #[test]
    fn complete_document_resolves_under_either_policy() {
        let doc = r#"{
            "banks": [], "discoverNeighborhoods": [], "frequentlyAskedQuestions": [],
            "homesInEveryZone": [], "newlyLaunched": [], "trendingProjects": [],
            "mumbaiHomes": {"logo": "l.png", "title": "Mumbai Homes", "description": "",
                            "disclaimer": "", "copyright": ""},
            "whyChooseUs": {"title": "Why us"}
        }"#;

        for policy in [MissingSlicePolicy::FailFast, MissingSlicePolicy::Degrade] {
            let content = RawContent::from_json(doc)
                .expect("parse")
                .resolve(policy)
                .expect("resolve");
            assert_eq!(content.why_choose_us.title, "Why us");
        }
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = RawContent::from_json(r#"{"banks": {"id": 1}}"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn policy_names_in_config() {
        let policy: MissingSlicePolicy = serde_json::from_str("\"degrade\"").expect("policy");
        assert_eq!(policy, MissingSlicePolicy::Degrade);
        let policy: MissingSlicePolicy = serde_json::from_str("\"fail-fast\"").expect("policy");
        assert_eq!(policy, MissingSlicePolicy::FailFast);
    }
}
