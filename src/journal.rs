use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::error::MoodcastError;

/// A mood rating on the 1..=10 scale used everywhere in the app.
///
/// Construction validates, deserialization validates, and interactive
/// inputs clamp, so an out-of-range score can never reach an `Entry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Validating constructor. Rejects values outside 1..=10.
    pub fn new(value: u8) -> Result<Self, MoodcastError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(MoodScore(value))
        } else {
            Err(MoodcastError::InvalidMoodScore(value))
        }
    }

    /// Saturating constructor for slider-style inputs.
    pub fn clamped(value: u8) -> Self {
        MoodScore(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Scores below 5 render with the "rough day" treatment.
    pub fn is_low(self) -> bool {
        self.0 < 5
    }
}

impl Default for MoodScore {
    fn default() -> Self {
        MoodScore(5)
    }
}

impl TryFrom<u8> for MoodScore {
    type Error = MoodcastError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MoodScore::new(value)
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> u8 {
        score.0
    }
}

impl fmt::Display for MoodScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an entry was captured: typed by hand or imported from a chat
/// screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Manual,
    Chat,
}

/// One observation in the journal. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub kind: EntryKind,
    pub mood: MoodScore,
    pub text: String,
    /// The note produced by the analysis step.
    pub derived_note: String,
    pub tags: Vec<String>,
}

/// Append-only observation log, newest first. No edits, no deletes, no cap.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: VecDeque<Entry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A journal pre-seeded with the two demo observations the app ships
    /// with, dated relative to today.
    pub fn with_samples() -> Self {
        let today = Utc::now().date_naive();
        let mut journal = Journal::new();
        journal.prepend(Entry {
            id: 1,
            date: today - Duration::days(2),
            time: "09:30".to_string(),
            kind: EntryKind::Manual,
            mood: MoodScore::clamped(4),
            text: "Woke up with a headache, skipped breakfast.".to_string(),
            derived_note: "Cycle day 2: physical discomfort is pulling mood down. \
                 Suggestion: have painkillers and warm water ready."
                .to_string(),
            tags: vec!["discomfort".to_string(), "period".to_string()],
        });
        journal.prepend(Entry {
            id: 2,
            date: today - Duration::days(1),
            time: "18:45".to_string(),
            kind: EntryKind::Chat,
            mood: MoodScore::clamped(3),
            text: "[chat screenshot uploaded]".to_string(),
            derived_note: "Keywords detected: \"so annoying\", \"redo it\". \
                 Irritability driven by work stress. Suggestion: listen first, \
                 skip the solutions."
                .to_string(),
            tags: vec!["work-stress".to_string(), "venting".to_string()],
        });
        journal
    }

    /// Insert at the front; the log reads newest to oldest.
    pub fn prepend(&mut self, entry: Entry) {
        self.entries.push_front(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&Entry> {
        self.entries.front()
    }

    pub fn to_vec(&self) -> Vec<Entry> {
        self.entries.iter().cloned().collect()
    }

    /// Next entry id: wall-clock milliseconds, bumped past the newest id so
    /// ids stay strictly increasing even within one millisecond.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        match self.newest() {
            Some(entry) => now_ms.max(entry.id + 1),
            None => now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_score_new_rejects_out_of_range() {
        assert!(MoodScore::new(0).is_err());
        assert!(MoodScore::new(11).is_err());
        assert_eq!(MoodScore::new(1).unwrap().get(), 1);
        assert_eq!(MoodScore::new(10).unwrap().get(), 10);
    }

    #[test]
    fn test_mood_score_clamped_saturates() {
        assert_eq!(MoodScore::clamped(0).get(), 1);
        assert_eq!(MoodScore::clamped(200).get(), 10);
        assert_eq!(MoodScore::clamped(7).get(), 7);
    }

    #[test]
    fn test_mood_score_deserialization_validates() {
        let ok: MoodScore = serde_json::from_str("9").unwrap();
        assert_eq!(ok.get(), 9);
        assert!(serde_json::from_str::<MoodScore>("0").is_err());
        assert!(serde_json::from_str::<MoodScore>("42").is_err());
    }

    #[test]
    fn test_low_mood_threshold_sits_below_five() {
        assert!(MoodScore::clamped(4).is_low());
        assert!(!MoodScore::clamped(5).is_low());
    }

    #[test]
    fn test_sample_journal_reads_newest_first() {
        let journal = Journal::with_samples();
        assert_eq!(journal.len(), 2);
        let newest = journal.newest().unwrap();
        assert_eq!(newest.id, 2);
        assert_eq!(newest.kind, EntryKind::Chat);
        let ids: Vec<i64> = journal.iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_prepend_places_entry_at_index_zero() {
        let mut journal = Journal::with_samples();
        let mut entry = journal.newest().unwrap().clone();
        entry.id = 99;
        journal.prepend(entry);
        assert_eq!(journal.len(), 3);
        assert_eq!(journal.to_vec()[0].id, 99);
    }

    #[test]
    fn test_next_id_is_monotonic_within_one_millisecond() {
        let mut journal = Journal::with_samples();
        let now = 1_700_000_000_000;
        let first = journal.next_id(now);
        assert_eq!(first, now);

        let mut entry = journal.newest().unwrap().clone();
        entry.id = first;
        journal.prepend(entry);

        let second = journal.next_id(now);
        assert_eq!(second, first + 1);
    }
}
