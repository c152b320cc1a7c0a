//! Approximate geographic location attached to a vote.

use serde::{Deserialize, Serialize};

/// Approximate location of a voter.
///
/// A location is only materialized when both latitude and longitude are
/// present and finite; partial or invalid location data is dropped entirely
/// rather than partially recorded. The optional place names are free-text
/// passthrough from the geolocation source and are never validated for
/// correctness, only for type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl VoteLocation {
    /// Create a location with coordinates only.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: None,
            region: None,
            country: None,
        }
    }
}
