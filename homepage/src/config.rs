//! Configuration file support.
//!
//! Loads optional `.homepage/config.toml` from the site root.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselSettings;
use crate::content::MissingSlicePolicy;
use crate::error::ConfigError;
use crate::sanitize::RawHtmlPolicy;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomepageConfig {
    /// Document `<title>`
    pub site_title: String,
    /// Behaviour when the content document lacks a section slice
    pub missing_slices: MissingSlicePolicy,
    /// How footer HTML fields reach the page
    pub raw_html: RawHtmlPolicy,
    pub carousel: CarouselConfig,
}

/// Carousel autoplay timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_ms: u64,
    pub resume_after_ms: u64,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            site_title: "Mumbai Homes | Find your next home".into(),
            missing_slices: MissingSlicePolicy::default(),
            raw_html: RawHtmlPolicy::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let settings = CarouselSettings::default();
        Self {
            autoplay_ms: settings.autoplay.as_millis() as u64,
            resume_after_ms: settings.resume_after.as_millis() as u64,
        }
    }
}

impl CarouselConfig {
    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            autoplay: Duration::from_millis(self.autoplay_ms),
            resume_after: Duration::from_millis(self.resume_after_ms),
        }
    }
}

impl HomepageConfig {
    /// Load config from `.homepage/config.toml` in the given root directory.
    /// Returns the default config if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(".homepage").join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
