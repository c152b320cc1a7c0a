//! This module defines the core data structures and types used across the
//! VibeCheck system. It re-exports the mood registry and vote result types.

pub mod location;
pub mod mood;
pub mod vote;

pub use location::VoteLocation;
pub use mood::{MoodCounts, MoodKey, MoodOption, MOOD_OPTIONS};
pub use vote::{VoteData, VotePoint};
