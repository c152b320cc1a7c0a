//! Integration tests for the full voting flow.
//!
//! These tests use the real VoteStoreService and aggregator but an in-memory
//! mock store, exercising the submit path, the multi-collection read path with
//! legacy schemas, and the daily vote lock together.

use chrono::Utc;
use serde_json::json;

use vibecheck::aggregate;
use vibecheck::lock::{DailyVoteLock, MemoryStore};
use vibecheck_repository::{MockVoteStoreProvider, VoteStoreService};
use vibecheck_shared::MoodKey;

#[tokio::test]
async fn test_submit_then_aggregate_round_trip() {
    let service = VoteStoreService::new(Box::new(MockVoteStoreProvider::new()));

    service
        .submit_vote(MoodKey::Happy, None)
        .await
        .expect("submit should succeed");

    let records = service.fetch_all().await.unwrap();
    let data = aggregate(&records, Utc::now().timestamp_millis());

    assert_eq!(data.counts.get(MoodKey::Happy), 1);
    assert_eq!(data.counts.total(), 1);
    // No location was supplied, so no point is produced.
    assert!(data.points.is_empty());
}

#[tokio::test]
async fn test_aggregation_spans_legacy_and_canonical_collections() {
    let now_ms = Utc::now().timestamp_millis();

    let mock = MockVoteStoreProvider::new();
    // Legacy collection: emoji-encoded mood, numeric epoch-ms timestamp.
    mock.seed_document("moods", json!({"mood": "🔥", "timestamp": now_ms - 5_000}));
    // Legacy collection: mood field already holding a canonical key.
    mock.seed_document("moods", json!({"mood": "sad", "timestamp": now_ms - 4_000}));
    // Canonical collection: key-encoded mood with a geotag.
    mock.seed_document(
        "votes",
        json!({
            "key": "happy",
            "mood": "🔥",
            "timestamp": now_ms - 3_000,
            "location": {"latitude": 51.5, "longitude": -0.1, "city": "London",
                         "region": null, "country": null}
        }),
    );
    // Outside the 24h window: contributes nothing.
    mock.seed_document("votes", json!({"key": "meh", "timestamp": now_ms - 90_000_000}));
    // Unresolvable mood: skipped entirely.
    mock.seed_document("votes", json!({"mood": "💀", "timestamp": now_ms}));

    let service = VoteStoreService::new(Box::new(mock));
    let records = service.fetch_all().await.unwrap();
    assert_eq!(records.len(), 5);

    let data = aggregate(&records, now_ms);
    assert_eq!(data.counts.get(MoodKey::Happy), 2);
    assert_eq!(data.counts.get(MoodKey::Meh), 0);
    assert_eq!(data.counts.get(MoodKey::Sad), 1);

    // Only the geotagged canonical record produces a point; explicit-null
    // place names are dropped, string-typed ones pass through.
    assert_eq!(data.points.len(), 1);
    let point = &data.points[0];
    assert_eq!(point.mood, MoodKey::Happy);
    assert_eq!(point.location.city.as_deref(), Some("London"));
    assert!(point.location.region.is_none());
}

#[tokio::test]
async fn test_submitted_vote_is_readable_by_legacy_emoji_readers() {
    let service = VoteStoreService::new(Box::new(MockVoteStoreProvider::new()));

    service.submit_vote(MoodKey::Sad, None).await.unwrap();

    let records = service.fetch_all().await.unwrap();
    assert_eq!(records.len(), 1);
    // The canonical record carries both encodings.
    assert_eq!(records[0]["key"], "sad");
    assert_eq!(records[0]["mood"], "😵‍💫");
}

#[tokio::test]
async fn test_daily_lock_gates_a_second_vote() {
    let today = Utc::now().date_naive();
    let service = VoteStoreService::new(Box::new(MockVoteStoreProvider::new()));
    let lock = DailyVoteLock::new(Box::new(MemoryStore::new()));

    // First vote of the day goes through and marks the lock.
    assert!(!lock.has_voted_on(today).unwrap());
    service.submit_vote(MoodKey::Meh, None).await.unwrap();
    lock.mark_voted_on(today).unwrap();

    // Second attempt the same day is blocked before reaching the store.
    assert!(lock.has_voted_on(today).unwrap());

    // The day after, the lock has implicitly expired.
    let tomorrow = today.succ_opt().unwrap();
    assert!(!lock.has_voted_on(tomorrow).unwrap());
}
