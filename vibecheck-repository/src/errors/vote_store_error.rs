//! Vote store error types.
//!
//! This module defines the unified error type for all vote store operations.
//! Unlike data-quality issues during aggregation (which degrade silently),
//! infrastructure failures from the store are propagated to the caller.

use thiserror::Error;

/// Unified errors from vote store operations.
///
/// Used by the `VoteStoreProvider` trait and `VoteStoreService` for all
/// remote document-store operations.
#[derive(Debug, Clone, Error)]
pub enum VoteStoreError {
    /// Failed to reach the document store backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to write a vote document.
    #[error("Write error: {0}")]
    WriteError(String),

    /// Failed to read documents from a collection.
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to parse a response from the document store backend.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the document store backend.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl VoteStoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::WriteError(msg.into())
    }

    /// Create a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::ReadError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
