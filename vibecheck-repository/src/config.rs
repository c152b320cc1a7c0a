//! Configuration types for the VoteStoreService.

use std::collections::HashMap;

use serde_json::Value;

use crate::interfaces::VoteStoreProvider;
use crate::mock::MockVoteStoreProvider;
use crate::rest::RestVoteStoreProvider;

/// Collection layout for the vote store.
///
/// Votes are written to the canonical collection only, but reads span the
/// legacy collections as well to support schema migration: older deployments
/// stored votes in a differently named collection with a drifted schema.
#[derive(Debug, Clone)]
pub struct VoteStoreConfig {
    /// Collection that new votes are written to and read from.
    pub canonical_collection: String,
    /// Older collections that are still scanned on reads, in scan order.
    pub legacy_collections: Vec<String>,
}

impl Default for VoteStoreConfig {
    fn default() -> Self {
        Self {
            canonical_collection: "votes".to_string(),
            legacy_collections: vec!["moods".to_string()],
        }
    }
}

/// Configuration for the vote store data source.
///
/// Use this to explicitly choose between mock and live document stores.
///
/// # Example
///
/// ```ignore
/// use vibecheck_repository::VoteStoreSource;
///
/// // Development/testing: use an in-memory store
/// let provider = VoteStoreSource::mock().into_provider();
///
/// // Production: use a live document-store REST API
/// let provider = VoteStoreSource::rest("http://localhost:8080").into_provider();
/// ```
#[derive(Debug, Clone)]
pub enum VoteStoreSource {
    /// Use an in-memory mock store, optionally pre-seeded per collection.
    Mock(HashMap<String, Vec<Value>>),

    /// Connect to a live JSON document-store REST API.
    Rest {
        /// Base URL of the document store (e.g., "http://localhost:8080").
        base_url: String,
    },
}

impl VoteStoreSource {
    /// Create an empty mock vote store source.
    pub fn mock() -> Self {
        Self::Mock(HashMap::new())
    }

    /// Create a mock vote store source pre-seeded with the given documents.
    pub fn mock_with_documents(documents: HashMap<String, Vec<Value>>) -> Self {
        Self::Mock(documents)
    }

    /// Create a live REST vote store source with the given base URL.
    pub fn rest(base_url: impl Into<String>) -> Self {
        Self::Rest {
            base_url: base_url.into(),
        }
    }

    /// Create the appropriate `VoteStoreProvider` implementation.
    pub fn into_provider(self) -> Box<dyn VoteStoreProvider> {
        match self {
            Self::Mock(documents) => Box::new(MockVoteStoreProvider::with_documents(documents)),
            Self::Rest { base_url } => Box::new(RestVoteStoreProvider::new(&base_url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collections() {
        let config = VoteStoreConfig::default();
        assert_eq!(config.canonical_collection, "votes");
        assert_eq!(config.legacy_collections, vec!["moods".to_string()]);
    }
}
