//! Daily vote lock.
//!
//! Tracks, via durable local storage, whether the current caller has already
//! voted on the current calendar day (client local time). The state machine
//! has two states, `NotVotedToday` and `VotedToday`: marking a vote moves to
//! `VotedToday`, and the reverse transition happens implicitly by calendar
//! rollover, with no timers involved. The rollover is modeled as a pure
//! comparison of the stored date against the given "today", so the lock is
//! fully testable with injected dates.

pub mod store;

pub use store::{FileStore, LocalStore, MemoryStore};

use chrono::{Local, LocalResult, NaiveDate, TimeZone};

use crate::errors::LockError;

/// Local-storage key holding the most recent vote date.
pub const LAST_VOTE_DATE_KEY: &str = "vibecheck.last_vote_date";

/// ISO calendar-date format used for the stored value.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-client restriction allowing at most one recorded vote per calendar day.
///
/// The lock owns a single local-storage key holding an ISO `YYYY-MM-DD` date
/// string: absent until the first vote, overwritten on each successful vote,
/// never explicitly cleared (it naturally goes stale once the date advances).
///
/// The `*_today` methods use the client's local calendar day; each has a
/// date-injected counterpart for testing.
pub struct DailyVoteLock {
    store: Box<dyn LocalStore>,
}

impl DailyVoteLock {
    /// Create a lock over the given local store.
    pub fn new(store: Box<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Whether a vote has already been recorded for today (local time).
    pub fn has_voted_today(&self) -> Result<bool, LockError> {
        self.has_voted_on(Local::now().date_naive())
    }

    /// Whether a vote has already been recorded for the given calendar day.
    ///
    /// This is a plain string-equality check against the stored date, not an
    /// elapsed-time check; a stored date other than `today` means the lock
    /// has already implicitly expired.
    pub fn has_voted_on(&self, today: NaiveDate) -> Result<bool, LockError> {
        let stored = self.store.get(LAST_VOTE_DATE_KEY)?;
        Ok(is_locked(stored.as_deref(), today))
    }

    /// Record that the caller voted today (local time).
    pub fn mark_voted_today(&self) -> Result<(), LockError> {
        self.mark_voted_on(Local::now().date_naive())
    }

    /// Record that the caller voted on the given calendar day.
    pub fn mark_voted_on(&self, today: NaiveDate) -> Result<(), LockError> {
        self.store
            .set(LAST_VOTE_DATE_KEY, &today.format(DATE_FORMAT).to_string())
    }

    /// The epoch-millisecond instant at which today's lock expires.
    ///
    /// `None` when no vote is recorded or the recorded date is not today.
    /// The value is derived, not stored, and is advisory for countdown
    /// display only.
    pub fn vote_reset_timestamp(&self) -> Result<Option<i64>, LockError> {
        self.reset_timestamp_on(Local::now().date_naive())
    }

    /// Date-injected variant of [`DailyVoteLock::vote_reset_timestamp`].
    pub fn reset_timestamp_on(&self, today: NaiveDate) -> Result<Option<i64>, LockError> {
        let stored = self.store.get(LAST_VOTE_DATE_KEY)?;
        if !is_locked(stored.as_deref(), today) {
            return Ok(None);
        }
        Ok(next_local_midnight_ms(today))
    }
}

/// Pure rollover check: the lock holds iff the stored date equals today.
fn is_locked(stored: Option<&str>, today: NaiveDate) -> bool {
    matches!(stored, Some(date) if date == today.format(DATE_FORMAT).to_string())
}

/// Epoch milliseconds of the next local midnight after `today`.
///
/// `None` only when the local timezone has no representation for that
/// midnight (a DST gap landing exactly on it).
fn next_local_midnight_ms(today: NaiveDate) -> Option<i64> {
    let next_midnight = today.succ_opt()?.and_hms_opt(0, 0, 0)?;
    match Local.from_local_datetime(&next_midnight) {
        LocalResult::Single(instant) => Some(instant.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp_millis()),
        LocalResult::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn lock_with_memory_store() -> DailyVoteLock {
        DailyVoteLock::new(Box::new(MemoryStore::new()))
    }

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_not_voted_with_empty_storage() {
        let lock = lock_with_memory_store();
        assert!(!lock.has_voted_on(date("2026-08-30")).unwrap());
    }

    #[test]
    fn test_voted_immediately_after_marking() {
        let lock = lock_with_memory_store();
        let today = date("2026-08-30");

        lock.mark_voted_on(today).unwrap();
        assert!(lock.has_voted_on(today).unwrap());
    }

    #[test]
    fn test_lock_expires_on_calendar_rollover() {
        let lock = lock_with_memory_store();

        lock.mark_voted_on(date("2026-08-30")).unwrap();
        // No explicit action: the stored date simply no longer equals "today".
        assert!(!lock.has_voted_on(date("2026-08-31")).unwrap());
    }

    #[test]
    fn test_marking_again_overwrites_stored_date() {
        let lock = lock_with_memory_store();

        lock.mark_voted_on(date("2026-08-30")).unwrap();
        lock.mark_voted_on(date("2026-08-31")).unwrap();

        assert!(!lock.has_voted_on(date("2026-08-30")).unwrap());
        assert!(lock.has_voted_on(date("2026-08-31")).unwrap());
    }

    #[test]
    fn test_reset_timestamp_is_none_before_any_vote() {
        let lock = lock_with_memory_store();
        assert_eq!(lock.reset_timestamp_on(date("2026-08-30")).unwrap(), None);
    }

    #[test]
    fn test_reset_timestamp_is_none_once_stale() {
        let lock = lock_with_memory_store();

        lock.mark_voted_on(date("2026-08-30")).unwrap();
        assert_eq!(lock.reset_timestamp_on(date("2026-08-31")).unwrap(), None);
    }

    #[test]
    fn test_reset_timestamp_is_strictly_in_the_future() {
        let lock = lock_with_memory_store();

        lock.mark_voted_today().unwrap();
        let reset_ms = lock
            .vote_reset_timestamp()
            .unwrap()
            .expect("reset instant should exist after voting");
        assert!(reset_ms > Utc::now().timestamp_millis());
    }

    #[test]
    fn test_is_locked_requires_exact_date_equality() {
        let today = date("2026-08-30");
        assert!(is_locked(Some("2026-08-30"), today));
        assert!(!is_locked(Some("2026-08-29"), today));
        assert!(!is_locked(Some("not-a-date"), today));
        assert!(!is_locked(None, today));
    }
}
