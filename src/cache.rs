use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::MoodcastError;
use crate::journal::MoodScore;
use crate::state::app::AppState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CachedInsight {
    pub data: String,
    pub timestamp: i64,
}

/// Hash key over the draft content an insight was derived from
fn cache_key(mood: MoodScore, text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    mood.get().hash(&mut hasher);
    text.hash(&mut hasher);
    hasher.finish()
}

/// Look up a previously derived insight for this draft content
pub fn get_cached<T: for<'de> Deserialize<'de>>(
    state: &AppState,
    mood: MoodScore,
    text: &str,
) -> Option<T> {
    let key = cache_key(mood, text);
    let cache = state.insight_cache.read();

    if let Some(cached) = cache.peek(&key) {
        tracing::debug!(mood = %mood, text_len = text.len(), "Insight cache hit");
        match serde_json::from_str::<T>(&cached.data) {
            Ok(parsed) => return Some(parsed),
            Err(e) => {
                tracing::warn!(mood = %mood, error = %e, "Failed to parse cached insight");
            }
        }
    }

    tracing::debug!(mood = %mood, text_len = text.len(), "Insight cache miss");
    None
}

/// Store a derived insight in the cache
pub fn cache_insight<T: Serialize>(
    state: &AppState,
    mood: MoodScore,
    text: &str,
    insight: &T,
) -> Result<(), MoodcastError> {
    let key = cache_key(mood, text);
    let data = serde_json::to_string(insight)?;

    let cached = CachedInsight {
        data,
        timestamp: chrono::Utc::now().timestamp(),
    };

    let mut cache = state.insight_cache.write();
    cache.put(key, cached);
    Ok(())
}
