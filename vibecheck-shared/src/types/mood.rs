//! Mood registry types.
//!
//! This module defines the fixed, closed set of mood identifiers together with
//! their display labels and emoji glyphs, and the per-mood count map produced
//! by aggregation. The set is fixed at build time; values outside it are
//! rejected during normalization, never coerced.

use serde::{Deserialize, Serialize};

/// Canonical identifier for one of the fixed mood categories.
///
/// The set is closed: exactly these three values exist, and any stored value
/// outside the set is invalid. Records carrying unknown moods are skipped by
/// the aggregator rather than coerced into a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKey {
    Happy,
    Meh,
    Sad,
}

impl MoodKey {
    /// All mood keys, in registry order.
    pub const ALL: [MoodKey; 3] = [MoodKey::Happy, MoodKey::Meh, MoodKey::Sad];

    /// The canonical string form of this key, as stored in vote records.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKey::Happy => "happy",
            MoodKey::Meh => "meh",
            MoodKey::Sad => "sad",
        }
    }

    /// Parse a canonical key string into a `MoodKey`.
    ///
    /// This is the membership predicate for the closed mood set: it returns
    /// `None` for any value outside the set.
    pub fn parse(value: &str) -> Option<MoodKey> {
        match value {
            "happy" => Some(MoodKey::Happy),
            "meh" => Some(MoodKey::Meh),
            "sad" => Some(MoodKey::Sad),
            _ => None,
        }
    }

    /// The emoji glyph for this key. Total over the mood set.
    pub fn emoji(&self) -> &'static str {
        match self {
            MoodKey::Happy => "🔥",
            MoodKey::Meh => "🙂",
            MoodKey::Sad => "😵‍💫",
        }
    }

    /// Resolve an emoji glyph back to its canonical key.
    ///
    /// Supports legacy records that stored the emoji string instead of the
    /// canonical key. Returns `None` for any glyph outside the registry.
    pub fn from_emoji(value: &str) -> Option<MoodKey> {
        MoodKey::ALL.iter().copied().find(|key| key.emoji() == value)
    }

    /// The human-readable display label for this key.
    pub fn label(&self) -> &'static str {
        match self {
            MoodKey::Happy => "On Fire",
            MoodKey::Meh => "Solid",
            MoodKey::Sad => "Meh",
        }
    }
}

/// Immutable (key, label, emoji) triple describing one mood choice.
///
/// One-to-one with [`MoodKey`]; used by callers rendering the vote UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodOption {
    /// The canonical mood key.
    pub key: MoodKey,
    /// Human-readable display label.
    pub label: &'static str,
    /// Emoji glyph shown for this mood.
    pub emoji: &'static str,
}

/// The fixed ordered list of mood options.
pub const MOOD_OPTIONS: [MoodOption; 3] = [
    MoodOption {
        key: MoodKey::Happy,
        label: "On Fire",
        emoji: "🔥",
    },
    MoodOption {
        key: MoodKey::Meh,
        label: "Solid",
        emoji: "🙂",
    },
    MoodOption {
        key: MoodKey::Sad,
        label: "Meh",
        emoji: "😵‍💫",
    },
];

/// Per-mood vote counts over the trailing vote window.
///
/// Every key is always present and zero-initialized; the map is never sparse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    pub happy: u64,
    pub meh: u64,
    pub sad: u64,
}

impl MoodCounts {
    /// Create a zero-initialized count map covering every mood key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Increment the count for the given mood by one.
    pub fn increment(&mut self, key: MoodKey) {
        match key {
            MoodKey::Happy => self.happy += 1,
            MoodKey::Meh => self.meh += 1,
            MoodKey::Sad => self.sad += 1,
        }
    }

    /// The count for the given mood.
    pub fn get(&self, key: MoodKey) -> u64 {
        match key {
            MoodKey::Happy => self.happy,
            MoodKey::Meh => self.meh,
            MoodKey::Sad => self.sad,
        }
    }

    /// Total votes across all moods.
    pub fn total(&self) -> u64 {
        self.happy + self.meh + self.sad
    }
}
