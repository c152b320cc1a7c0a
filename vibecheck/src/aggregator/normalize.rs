//! Schema-drift tolerant decoding of raw stored vote records.
//!
//! Stored records are heterogeneous: the mood may be encoded as a canonical
//! key or as a legacy emoji string, the timestamp may be the store's native
//! representation or a plain epoch-millisecond number, and the location may be
//! missing or partially malformed. Decoding is modeled as an explicit
//! tagged-union step returning a canonical record or a skip signal; it is
//! total and side-effect-free, and every malformed field degrades to "skip
//! this contribution" rather than an error.

use chrono::DateTime;
use serde_json::{Map, Value};

use vibecheck_shared::{MoodKey, VoteLocation};

/// A raw stored record reduced to canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedVote {
    /// The resolved canonical mood key.
    pub mood: MoodKey,
    /// The resolved vote instant in epoch milliseconds.
    pub timestamp_ms: i64,
    /// The record's location, if present and valid.
    pub location: Option<VoteLocation>,
}

/// Outcome of decoding one stored record.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedRecord {
    /// The record resolved to a canonical vote.
    Vote(NormalizedVote),
    /// The record's mood could not be resolved; it contributes to neither
    /// counts nor points.
    Skip,
}

/// Decode one raw stored record into canonical form.
///
/// Mood resolution is attempted in order, first match wins:
///
/// 1. a string `key` field that is a valid mood key;
/// 2. a string `mood` field matching a known emoji glyph (legacy schema);
/// 3. a string `mood` field that is itself a valid mood key.
///
/// Records whose mood cannot be resolved are skipped entirely. A record with
/// no resolvable timestamp is kept and treated as having been cast at
/// `now_ms`; this keep-unknown-timestamps policy is deliberate, not a
/// fallthrough.
///
/// # Arguments
///
/// * `record` - The raw string-keyed record as retrieved from storage
/// * `now_ms` - The aggregation instant in epoch milliseconds
pub fn decode_record(record: &Value, now_ms: i64) -> DecodedRecord {
    let Some(mood) = resolve_mood(record) else {
        return DecodedRecord::Skip;
    };

    DecodedRecord::Vote(NormalizedVote {
        mood,
        timestamp_ms: resolve_timestamp_ms(record.get("timestamp"), now_ms),
        location: resolve_location(record.get("location")),
    })
}

fn resolve_mood(record: &Value) -> Option<MoodKey> {
    if let Some(key) = record.get("key").and_then(Value::as_str) {
        if let Some(mood) = MoodKey::parse(key) {
            return Some(mood);
        }
    }

    if let Some(mood) = record.get("mood").and_then(Value::as_str) {
        // Legacy records stored the emoji glyph; newer ones may have stored
        // the canonical key in the same field.
        return MoodKey::from_emoji(mood).or_else(|| MoodKey::parse(mood));
    }

    None
}

/// Resolve a stored timestamp value to epoch milliseconds.
///
/// Native store timestamps surface either as RFC 3339 strings or as
/// `{seconds, nanos}` objects in legacy exports; plain numbers are taken as
/// epoch milliseconds directly. Anything else resolves to `now_ms`.
fn resolve_timestamp_ms(value: Option<&Value>, now_ms: i64) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|v| v as i64))
            .unwrap_or(now_ms),
        Some(Value::String(text)) => DateTime::parse_from_rfc3339(text)
            .map(|instant| instant.timestamp_millis())
            .unwrap_or(now_ms),
        Some(Value::Object(map)) => {
            let nanos = map
                .get("nanos")
                .or_else(|| map.get("nanoseconds"))
                .and_then(Value::as_i64)
                .unwrap_or(0);
            match map.get("seconds").and_then(Value::as_i64) {
                // Saturate rather than overflow: a wildly out-of-range stored
                // value must degrade, never panic mid-aggregation.
                Some(seconds) => seconds
                    .saturating_mul(1_000)
                    .saturating_add(nanos / 1_000_000),
                None => now_ms,
            }
        }
        _ => now_ms,
    }
}

/// Materialize a location only when both coordinates coerce to finite numbers.
///
/// Partial or invalid location data is dropped entirely, never partially
/// recorded. Optional place names pass through only when string-typed.
fn resolve_location(value: Option<&Value>) -> Option<VoteLocation> {
    let map = value?.as_object()?;

    let latitude = coerce_finite(map.get("latitude"))?;
    let longitude = coerce_finite(map.get("longitude"))?;

    let mut location = VoteLocation::new(latitude, longitude);
    location.city = string_member(map, "city");
    location.region = string_member(map, "region");
    location.country = string_member(map, "country");
    Some(location)
}

/// Coerce a JSON number or numeric string to a finite `f64`.
///
/// Shared with the locator so stored records and geolocation payloads get the
/// same tolerance.
pub(crate) fn coerce_finite(value: Option<&Value>) -> Option<f64> {
    let coerced = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    coerced.filter(|v| v.is_finite())
}

fn string_member(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}
