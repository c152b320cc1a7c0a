//! # VibeCheck Shared
//!
//! This crate defines shared data structures and types used across the VibeCheck
//! mood voting system. It includes the mood registry (the closed set of mood
//! identifiers with their labels and emoji glyphs) and the aggregate result types
//! produced by the vote aggregator.

pub mod types;

pub use types::location::VoteLocation;
pub use types::mood::{MoodCounts, MoodKey, MoodOption, MOOD_OPTIONS};
pub use types::vote::{VoteData, VotePoint};
