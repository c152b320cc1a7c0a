pub mod vote_store_error;

pub use vote_store_error::VoteStoreError;
