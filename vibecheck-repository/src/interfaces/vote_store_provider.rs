//! Vote store provider trait definition.
//!
//! This module defines the abstract interface for the remote document store,
//! allowing for different backend implementations (REST document stores,
//! in-memory mocks, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::VoteStoreError;

/// Abstracts the underlying remote document store.
///
/// Implementations are injected into `VoteStoreService` to enable dependency
/// injection and easy testing with mock implementations. The store is a black
/// box: it writes arbitrary string-keyed JSON documents into named collections
/// and reads every document back from a collection in insertion order.
///
/// The provider performs no filtering or interpretation of record contents;
/// that is entirely the aggregator's responsibility.
#[async_trait]
pub trait VoteStoreProvider: Send + Sync {
    /// Write a single document into the named collection.
    ///
    /// Every call produces a new distinct document; there is no idempotency
    /// guarantee and no deduplication.
    ///
    /// # Arguments
    ///
    /// * `collection` - Name of the target collection
    /// * `document` - The string-keyed JSON document to store
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The store-assigned document id
    /// * `Err(VoteStoreError)` - If the write fails
    async fn write_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, VoteStoreError>;

    /// Read every document from the named collection.
    ///
    /// Documents are returned in insertion order as arbitrary string-keyed
    /// JSON values; heterogeneous legacy schemas are returned as-is.
    ///
    /// # Arguments
    ///
    /// * `collection` - Name of the collection to scan
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Value>)` - All documents in the collection (possibly empty)
    /// * `Err(VoteStoreError)` - If the read fails
    async fn read_all(&self, collection: &str) -> Result<Vec<Value>, VoteStoreError>;
}
