//! Vote store service implementation.
//!
//! This module provides the main service for interacting with the vote store.
//! Application code uses this to submit votes and to fetch the raw records
//! that the aggregator reduces.
//!
//! # Note on Reads
//!
//! `fetch_all` scans a *set* of collections (legacy collections first, then
//! the canonical one) to support schema migration. It performs no filtering
//! or interpretation of the records; heterogeneous legacy schemas are
//! returned as-is and resolved by the aggregator.

use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use vibecheck_shared::{MoodKey, VoteLocation};

use crate::config::VoteStoreConfig;
use crate::errors::VoteStoreError;
use crate::interfaces::VoteStoreProvider;

/// The main service for interacting with the vote store.
///
/// This is the high-level API that application code should use. It builds the
/// canonical vote record on writes and concatenates collection scans on reads,
/// delegating to a `VoteStoreProvider` for the actual backend operations.
/// Store failures are propagated to the caller, never swallowed.
///
/// # Example
///
/// ```ignore
/// use vibecheck_repository::{VoteStoreService, VoteStoreSource};
/// use vibecheck_shared::MoodKey;
///
/// let service = VoteStoreService::new(VoteStoreSource::mock().into_provider());
/// let id = service.submit_vote(MoodKey::Happy, None).await?;
/// let records = service.fetch_all().await?;
/// ```
pub struct VoteStoreService {
    provider: Box<dyn VoteStoreProvider>,
    config: VoteStoreConfig,
}

impl VoteStoreService {
    /// Create a new VoteStoreService with the default collection layout.
    ///
    /// The default layout writes to `"votes"` and additionally scans the
    /// legacy `"moods"` collection on reads.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `VoteStoreProvider`
    pub fn new(provider: Box<dyn VoteStoreProvider>) -> Self {
        Self {
            provider,
            config: VoteStoreConfig::default(),
        }
    }

    /// Create a new VoteStoreService with a custom collection layout.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `VoteStoreProvider`
    /// * `config` - Collection layout for writes and reads
    pub fn with_config(provider: Box<dyn VoteStoreProvider>, config: VoteStoreConfig) -> Self {
        Self { provider, config }
    }

    /// Submit a single mood vote to the canonical collection.
    ///
    /// The stored record carries both the canonical key and the emoji glyph so
    /// that readers of the legacy schema keep working. The timestamp is the
    /// store's native representation (RFC 3339 UTC) taken at write time.
    /// The location sub-object is explicitly `null` when no location is
    /// supplied; within a location, absent place names are stored as explicit
    /// `null`s, never omitted.
    ///
    /// Every call produces a new distinct record; there is no idempotency
    /// guarantee and no deduplication.
    ///
    /// # Arguments
    ///
    /// * `mood` - The resolved canonical mood key
    /// * `location` - The voter's approximate location, if known
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The store-assigned document id
    /// * `Err(VoteStoreError)` - If the write fails
    #[instrument(skip(self, location), fields(mood = mood.as_str()))]
    pub async fn submit_vote(
        &self,
        mood: MoodKey,
        location: Option<&VoteLocation>,
    ) -> Result<String, VoteStoreError> {
        let location_value = match location {
            Some(location) => json!({
                "latitude": location.latitude,
                "longitude": location.longitude,
                "city": location.city,
                "region": location.region,
                "country": location.country,
            }),
            None => Value::Null,
        };

        let document = json!({
            "key": mood.as_str(),
            "mood": mood.emoji(),
            "timestamp": Utc::now().to_rfc3339(),
            "location": location_value,
        });

        let id = self
            .provider
            .write_document(&self.config.canonical_collection, document)
            .await?;

        debug!(document_id = %id, "Vote submitted");
        Ok(id)
    }

    /// Fetch every raw vote record across all configured collections.
    ///
    /// Scans the legacy collections first, then the canonical collection, and
    /// concatenates the results without deduplication. Records are returned
    /// in insertion order within each collection, exactly as the store hands
    /// them back.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Value>)` - All raw records across the scanned collections
    /// * `Err(VoteStoreError)` - If any collection read fails
    pub async fn fetch_all(&self) -> Result<Vec<Value>, VoteStoreError> {
        let mut records = Vec::new();

        for collection in &self.config.legacy_collections {
            let mut batch = self.provider.read_all(collection).await?;
            debug!(collection = %collection, count = batch.len(), "Scanned legacy collection");
            records.append(&mut batch);
        }

        let mut batch = self
            .provider
            .read_all(&self.config.canonical_collection)
            .await?;
        debug!(
            collection = %self.config.canonical_collection,
            count = batch.len(),
            "Scanned canonical collection"
        );
        records.append(&mut batch);

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockVoteStoreProvider;
    use std::sync::Arc;

    fn service_with_mock() -> (VoteStoreService, Arc<MockVoteStoreProvider>) {
        let mock = Arc::new(MockVoteStoreProvider::new());
        let service = VoteStoreService::new(Box::new(SharedMock(mock.clone())));
        (service, mock)
    }

    // Thin forwarding wrapper so tests can inspect the mock after handing
    // ownership of the provider to the service.
    struct SharedMock(Arc<MockVoteStoreProvider>);

    #[async_trait::async_trait]
    impl VoteStoreProvider for SharedMock {
        async fn write_document(
            &self,
            collection: &str,
            document: Value,
        ) -> Result<String, VoteStoreError> {
            self.0.write_document(collection, document).await
        }

        async fn read_all(&self, collection: &str) -> Result<Vec<Value>, VoteStoreError> {
            self.0.read_all(collection).await
        }
    }

    #[tokio::test]
    async fn test_submit_vote_writes_canonical_record() {
        let (service, mock) = service_with_mock();

        service
            .submit_vote(MoodKey::Happy, None)
            .await
            .expect("submit should succeed");

        let records = mock.read_all("votes").await.unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record["key"], "happy");
        assert_eq!(record["mood"], "🔥");
        assert!(record["timestamp"].is_string());
        assert!(record["location"].is_null());
    }

    #[tokio::test]
    async fn test_submit_vote_stores_explicit_null_place_names() {
        let (service, mock) = service_with_mock();
        let location = VoteLocation::new(40.4, -3.7);

        service
            .submit_vote(MoodKey::Sad, Some(&location))
            .await
            .unwrap();

        let records = mock.read_all("votes").await.unwrap();
        let stored = &records[0]["location"];
        assert_eq!(stored["latitude"], 40.4);
        assert_eq!(stored["longitude"], -3.7);
        // Absent place names are stored as explicit nulls, never omitted.
        assert!(stored["city"].is_null());
        assert!(stored["region"].is_null());
        assert!(stored["country"].is_null());
        assert!(stored.as_object().unwrap().contains_key("city"));
    }

    #[tokio::test]
    async fn test_submit_vote_keeps_present_place_names() {
        let (service, mock) = service_with_mock();
        let mut location = VoteLocation::new(51.5, -0.1);
        location.city = Some("London".to_string());
        location.country = Some("United Kingdom".to_string());

        service
            .submit_vote(MoodKey::Meh, Some(&location))
            .await
            .unwrap();

        let records = mock.read_all("votes").await.unwrap();
        let stored = &records[0]["location"];
        assert_eq!(stored["city"], "London");
        assert_eq!(stored["country"], "United Kingdom");
        assert!(stored["region"].is_null());
    }

    #[tokio::test]
    async fn test_fetch_all_scans_legacy_then_canonical() {
        let (service, mock) = service_with_mock();

        mock.seed_document("moods", serde_json::json!({"mood": "🙂"}));
        mock.seed_document("votes", serde_json::json!({"key": "sad"}));

        let records = service.fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        // Legacy collection comes first in the concatenation.
        assert_eq!(records[0]["mood"], "🙂");
        assert_eq!(records[1]["key"], "sad");
    }

    #[tokio::test]
    async fn test_fetch_all_does_not_deduplicate() {
        let (service, mock) = service_with_mock();
        let duplicate = serde_json::json!({"key": "happy"});

        mock.seed_document("moods", duplicate.clone());
        mock.seed_document("votes", duplicate);

        let records = service.fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
    }
}
