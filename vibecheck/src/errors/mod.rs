//! Error types for the VibeCheck client.
//!
//! Infrastructure failures (store, local storage) are propagated; data-quality
//! issues inside the aggregator never surface as errors at all.

use thiserror::Error;

use vibecheck_repository::VoteStoreError;

/// Errors from the daily vote lock's durable local storage.
#[derive(Debug, Clone, Error)]
pub enum LockError {
    /// The underlying local storage could not be read or written.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Stored state could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl LockError {
    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}

/// Errors that can occur during client initialization or execution.
#[derive(Error, Debug)]
pub enum VibeError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Vote store error.
    #[error("Vote store error: {0}")]
    StoreError(#[from] VoteStoreError),

    /// Daily vote lock error.
    #[error("Vote lock error: {0}")]
    LockError(#[from] LockError),

    /// Output serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VibeError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
