pub mod vote_store_provider;

pub use vote_store_provider::VoteStoreProvider;
