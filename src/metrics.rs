use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for observability, atomic so any thread may bump them.
/// Clones share the underlying counters.
#[derive(Clone, Default)]
pub struct Metrics {
    /// View state transitions (tab switches, modal toggles, draft edits)
    pub state_transitions: Arc<AtomicU64>,
    /// Entries committed to the journal
    pub entries_submitted: Arc<AtomicU64>,
    /// Analyses cancelled before resolving
    pub analyses_cancelled: Arc<AtomicU64>,
    /// Insight cache hit count
    pub cache_hit_count: Arc<AtomicU64>,
    /// Insight cache miss count
    pub cache_miss_count: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters for the read surface.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub state_transitions: u64,
    pub entries_submitted: u64,
    pub analyses_cancelled: u64,
    pub cache_hit_count: u64,
    pub cache_miss_count: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view state transition
    pub fn record_state_transition(&self) {
        self.state_transitions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a committed entry
    pub fn record_entry_submitted(&self) {
        self.entries_submitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cancelled analysis
    pub fn record_analysis_cancelled(&self) {
        self.analyses_cancelled.fetch_add(1, Ordering::Relaxed);
    }

    /// Record cache hit
    pub fn record_cache_hit(&self) {
        self.cache_hit_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record cache miss
    pub fn record_cache_miss(&self) {
        self.cache_miss_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            state_transitions: self.state_transitions.load(Ordering::Relaxed),
            entries_submitted: self.entries_submitted.load(Ordering::Relaxed),
            analyses_cancelled: self.analyses_cancelled.load(Ordering::Relaxed),
            cache_hit_count: self.cache_hit_count.load(Ordering::Relaxed),
            cache_miss_count: self.cache_miss_count.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate_independently() {
        let metrics = Metrics::new();
        metrics.record_state_transition();
        metrics.record_state_transition();
        metrics.record_entry_submitted();
        metrics.record_cache_miss();

        let snap = metrics.snapshot();
        assert_eq!(snap.state_transitions, 2);
        assert_eq!(snap.entries_submitted, 1);
        assert_eq!(snap.analyses_cancelled, 0);
        assert_eq!(snap.cache_hit_count, 0);
        assert_eq!(snap.cache_miss_count, 1);
    }

    #[test]
    fn test_clones_share_the_same_counters() {
        let metrics = Metrics::new();
        let clone = metrics.clone();
        clone.record_analysis_cancelled();
        assert_eq!(metrics.snapshot().analyses_cancelled, 1);
    }
}
