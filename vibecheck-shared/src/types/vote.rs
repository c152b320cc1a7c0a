//! Aggregate result types produced by the vote aggregator.

use serde::{Deserialize, Serialize};

use crate::types::location::VoteLocation;
use crate::types::mood::{MoodCounts, MoodKey};

/// A single geotagged vote that survived the time-window filter.
///
/// Points are only produced for records that both pass the window filter and
/// carry a valid location; the timestamp is the record's resolved
/// epoch-millisecond instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotePoint {
    /// The resolved canonical mood key.
    pub mood: MoodKey,
    /// Resolved vote instant in epoch milliseconds.
    pub timestamp_ms: i64,
    /// The voter's approximate location.
    #[serde(flatten)]
    pub location: VoteLocation,
}

/// Aggregate view of recent votes: per-mood counts plus geotagged points.
///
/// The point sequence is the strict subset of counted votes that also carry a
/// valid location, in encounter order across the scanned collections. No
/// further ordering is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteData {
    pub counts: MoodCounts,
    pub points: Vec<VotePoint>,
}

impl VoteData {
    /// An empty result: zero counts, no points.
    pub fn empty() -> Self {
        Self {
            counts: MoodCounts::empty(),
            points: Vec::new(),
        }
    }
}
