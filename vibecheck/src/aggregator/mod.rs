//! Vote normalization and aggregation.
//!
//! Reduces heterogeneous raw stored records to a canonical per-mood count map
//! and a list of geotagged points within the trailing 24-hour window. The
//! reduction is a pure single pass over already-fetched records: it is
//! commutative and associative over the record sequence, so the result does
//! not depend on collection scan order, and it never fails regardless of how
//! malformed individual records are.

pub mod normalize;

pub use normalize::{decode_record, DecodedRecord, NormalizedVote};

use serde_json::Value;
use tracing::debug;

use vibecheck_shared::{MoodCounts, VoteData, VotePoint};

/// Length of the trailing vote window in milliseconds (24 hours).
pub const VOTE_WINDOW_MS: i64 = 86_400_000;

/// Aggregate raw stored records into per-mood counts and geotagged points.
///
/// Per record: the timestamp is resolved to epoch milliseconds (unknown
/// timestamps resolve to `now_ms` and are kept); records older than
/// `now_ms - 24h` are discarded entirely; the mood is resolved despite schema
/// drift or the record is skipped; surviving records increment their mood's
/// count, and the subset carrying a valid location additionally produces a
/// point. Count eligibility is independent of location validity.
///
/// The window boundary is inclusive: a record stamped exactly at the cutoff
/// is counted.
///
/// # Arguments
///
/// * `records` - Raw records in encounter order across the scanned collections
/// * `now_ms` - The aggregation instant in epoch milliseconds
///
/// # Returns
///
/// The counts over all surviving mood-resolvable records plus the points for
/// those that also carry a valid location, in encounter order.
pub fn aggregate(records: &[Value], now_ms: i64) -> VoteData {
    let cutoff = now_ms - VOTE_WINDOW_MS;
    let mut counts = MoodCounts::empty();
    let mut points = Vec::new();

    for record in records {
        let vote = match decode_record(record, now_ms) {
            DecodedRecord::Vote(vote) => vote,
            DecodedRecord::Skip => continue,
        };

        if vote.timestamp_ms < cutoff {
            continue;
        }

        counts.increment(vote.mood);

        if let Some(location) = vote.location {
            points.push(VotePoint {
                mood: vote.mood,
                timestamp_ms: vote.timestamp_ms,
                location,
            });
        }
    }

    debug!(
        records = records.len(),
        counted = counts.total(),
        points = points.len(),
        "Aggregated vote records"
    );

    VoteData { counts, points }
}
