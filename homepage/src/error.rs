//! Error types for content loading, configuration and enquiries.

use std::path::PathBuf;

use thiserror::Error;

use crate::content::SectionKey;

/// Failure to turn a content document into a [`crate::content::WebsiteContent`].
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content document is missing slices: {}", join_keys(.0))]
    MissingSlices(Vec<SectionKey>),
}

fn join_keys(keys: &[SectionKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Enquiry submission outcome other than success.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnquiryError {
    /// Shown to the user; the form stays open and nothing is sent.
    #[error("Please agree to the terms and conditions before submitting.")]
    TermsNotAccepted,
    #[error("enquiry delivery failed: {0}")]
    Delivery(String),
}

/// Failure to load a [`crate::config::HomepageConfig`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
