//! Mock vote store for testing and local development.
//!
//! The `MockVoteStoreProvider` can be pre-populated with per-collection
//! documents, allowing tests to exercise the full read path (including legacy
//! schemas) without network access.
//!
//! # Example
//!
//! ```ignore
//! use vibecheck_repository::{MockVoteStoreProvider, VoteStoreProvider};
//! use serde_json::json;
//!
//! let store = MockVoteStoreProvider::new();
//! store.seed_document("moods", json!({"mood": "🔥", "timestamp": 1_700_000_000_000i64}));
//!
//! let records = store.read_all("moods").await?;
//! assert_eq!(records.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::VoteStoreError;
use crate::interfaces::VoteStoreProvider;

/// Mock vote store that keeps documents in memory.
///
/// Use this for testing and local development without a live backend.
/// Documents are kept per collection in insertion order; reads from an
/// unknown collection return an empty sequence, matching a freshly created
/// collection in the real store.
pub struct MockVoteStoreProvider {
    /// Map of collection name -> documents in insertion order.
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MockVoteStoreProvider {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Create a mock store pre-populated with the given per-collection documents.
    pub fn with_documents(documents: HashMap<String, Vec<Value>>) -> Self {
        Self {
            collections: RwLock::new(documents),
        }
    }

    /// Append a document to a collection without going through the async API.
    ///
    /// Useful for seeding legacy-schema records in tests.
    pub fn seed_document(&self, collection: &str, document: Value) {
        self.collections
            .write()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }

    /// Number of documents in the given collection.
    pub fn collection_len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .unwrap()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Check if the mock holds no documents at all.
    pub fn is_empty(&self) -> bool {
        self.collections
            .read()
            .unwrap()
            .values()
            .all(Vec::is_empty)
    }
}

impl Default for MockVoteStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoteStoreProvider for MockVoteStoreProvider {
    async fn write_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, VoteStoreError> {
        let id = Uuid::new_v4().to_string();
        self.collections
            .write()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Value>, VoteStoreError> {
        Ok(self
            .collections
            .read()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_write_then_read_back() {
        let store = MockVoteStoreProvider::new();

        let id = store
            .write_document("votes", json!({"key": "happy"}))
            .await
            .unwrap();
        assert!(!id.is_empty());

        let records = store.read_all("votes").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["key"], "happy");
    }

    #[tokio::test]
    async fn test_unknown_collection_reads_empty() {
        let store = MockVoteStoreProvider::new();
        let records = store.read_all("missing").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_writes_preserve_insertion_order() {
        let store = MockVoteStoreProvider::new();
        store
            .write_document("votes", json!({"key": "happy"}))
            .await
            .unwrap();
        store
            .write_document("votes", json!({"key": "sad"}))
            .await
            .unwrap();

        let records = store.read_all("votes").await.unwrap();
        assert_eq!(records[0]["key"], "happy");
        assert_eq!(records[1]["key"], "sad");
    }

    #[tokio::test]
    async fn test_every_write_produces_a_distinct_document() {
        let store = MockVoteStoreProvider::new();
        let document = json!({"key": "meh"});

        store
            .write_document("votes", document.clone())
            .await
            .unwrap();
        store.write_document("votes", document).await.unwrap();

        assert_eq!(store.collection_len("votes"), 2);
    }

    #[test]
    fn test_seed_document() {
        let store = MockVoteStoreProvider::new();
        assert!(store.is_empty());

        store.seed_document("moods", json!({"mood": "🔥"}));
        assert_eq!(store.collection_len("moods"), 1);
        assert!(!store.is_empty());
    }
}
