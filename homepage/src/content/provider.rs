//! Shared, read-mostly holder of the current content snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::{MissingSlicePolicy, RawContent, WebsiteContent};
use crate::error::ContentError;

/// Holds the content aggregate loaded at startup.
///
/// A render pass calls [`ContentProvider::snapshot`] once and hands slices of
/// that one `Arc` to every section, so all sections see the same data even if
/// [`ContentProvider::replace`] runs concurrently.
#[derive(Debug)]
pub struct ContentProvider {
    current: RwLock<Arc<WebsiteContent>>,
}

impl ContentProvider {
    pub fn new(content: WebsiteContent) -> Self {
        Self {
            current: RwLock::new(Arc::new(content)),
        }
    }

    /// Parse and resolve a JSON content document.
    pub fn from_json(text: &str, policy: MissingSlicePolicy) -> Result<Self, ContentError> {
        let content = RawContent::from_json(text)?.resolve(policy)?;
        Ok(Self::new(content))
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<WebsiteContent> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a reloaded aggregate, returning the previous one.
    pub fn replace(&self, content: WebsiteContent) -> Arc<WebsiteContent> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!("content snapshot replaced");
        std::mem::replace(&mut *guard, Arc::new(content))
    }
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::new(WebsiteContent::default())
    }
}
