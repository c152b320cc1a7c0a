//! # VibeCheck Repository
//!
//! This crate provides traits and implementations for interacting with the
//! remote vote store. It includes definitions for errors, interfaces, a
//! concrete implementation for a JSON document-store REST API, and an
//! in-memory mock for testing.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod mock;
pub mod rest;
pub mod service;

pub use config::{VoteStoreConfig, VoteStoreSource};
pub use errors::VoteStoreError;
pub use interfaces::VoteStoreProvider;
pub use mock::MockVoteStoreProvider;
pub use rest::RestVoteStoreProvider;
pub use service::VoteStoreService;
