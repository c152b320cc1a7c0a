//! REST document-store backend implementation.

pub mod provider;

pub use provider::RestVoteStoreProvider;
