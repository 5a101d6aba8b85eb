//! Content sources and their priority order.

mod nitter;

pub use nitter::{parse_nitter_rss, NitterSource};

use std::collections::HashSet;
use std::future::Future;

use crate::error::{RegistryError, SourceError};
use crate::types::RawItem;

/// Identity and address of one content source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceEndpoint {
    pub name: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl SourceEndpoint {
    #[must_use]
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            name: name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl std::fmt::Display for SourceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.base_url)
    }
}

/// Transport for one endpoint: fetch up to `count` recent posts for a user.
pub trait ContentSource {
    fn endpoint(&self) -> &SourceEndpoint;

    /// Fetch at most `count` items, newest first as the source orders them.
    ///
    /// An empty `Ok` means the source answered but had nothing.
    fn get_items(
        &self,
        username: &str,
        count: usize,
    ) -> impl Future<Output = Result<Vec<RawItem>, SourceError>> + Send;
}

/// Fixed, priority-ordered list of sources. Immutable once built.
#[derive(Debug)]
pub struct SourceRegistry<S> {
    sources: Vec<S>,
}

impl<S: ContentSource> SourceRegistry<S> {
    /// # Errors
    ///
    /// Returns [`RegistryError`] if `sources` is empty or two endpoints share a name.
    pub fn new(sources: Vec<S>) -> Result<Self, RegistryError> {
        if sources.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for source in &sources {
            let name = &source.endpoint().name;
            if !seen.insert(name.clone()) {
                return Err(RegistryError::DuplicateName(name.clone()));
            }
        }
        Ok(Self { sources })
    }

    /// Sources in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.sources.iter()
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &SourceEndpoint> {
        self.sources.iter().map(ContentSource::endpoint)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
