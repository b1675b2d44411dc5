use chrono::Utc;
use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::oneshot;

use crate::analysis::Insight;
use crate::cache::CachedInsight;
use crate::config::{get_tracker_config, TrackerConfig};
use crate::error::MoodcastError;
use crate::journal::{Entry, EntryKind, Journal, MoodScore};
use crate::metrics::Metrics;
use crate::state::view::{AnalysisPhase, DraftEntry, Tab, ViewState};

/// Cancel handle for the running analysis task.
pub struct InflightAnalysis {
    pub cancel: oneshot::Sender<()>,
    pub started_at: i64,
}

/// Shared state for the whole tracker.
/// All mutable state is centralized here and mutated only through named
/// methods, so every transition has one auditable place.
#[derive(Clone)]
pub struct AppState {
    /// UI-facing state: active tab, modal, draft, analysis lifecycle
    pub view: Arc<RwLock<ViewState>>,
    /// Observation log, newest first
    pub journal: Arc<RwLock<Journal>>,
    /// Current cycle day
    pub cycle_day: Arc<RwLock<u32>>,
    /// Insight cache (LRU with bounded size)
    pub insight_cache: Arc<RwLock<LruCache<u64, CachedInsight>>>,
    /// Cancel handle for the in-flight analysis task, if any
    pub inflight: Arc<RwLock<Option<InflightAnalysis>>>,
    /// Observability counters
    pub metrics: Metrics,
    /// Tunables, fixed at construction
    pub config: TrackerConfig,
}

impl AppState {
    /// Create a new AppState from the global configuration
    pub fn new() -> Self {
        Self::with_config(get_tracker_config().clone())
    }

    /// Create a new AppState from an explicit configuration. Tests use this
    /// to shrink the analysis delay.
    pub fn with_config(config: TrackerConfig) -> Self {
        let capacity = NonZeroUsize::new(config.insight_cache_size.max(1))
            .expect("capacity >= 1");
        let max_day = config.chart_days.max(1);
        AppState {
            view: Arc::new(RwLock::new(ViewState::new(&config))),
            journal: Arc::new(RwLock::new(Journal::with_samples())),
            cycle_day: Arc::new(RwLock::new(config.default_cycle_day.clamp(1, max_day))),
            insight_cache: Arc::new(RwLock::new(LruCache::new(capacity))),
            inflight: Arc::new(RwLock::new(None)),
            metrics: Metrics::new(),
            config,
        }
    }

    fn default_mood(&self) -> MoodScore {
        MoodScore::clamped(self.config.default_draft_mood)
    }

    /// Snapshot of the UI-facing state
    pub fn view(&self) -> ViewState {
        self.view.read().clone()
    }

    /// Switch the active tab
    pub fn select_tab(&self, tab: Tab) {
        self.view.write().active_tab = tab;
        self.metrics.record_state_transition();
        tracing::debug!(tab = ?tab, "Tab selected");
    }

    /// Open the add-entry modal. A terminal analysis phase from an earlier
    /// submission resets to Idle; a pending one is left alone.
    pub fn open_entry_modal(&self) {
        {
            let mut view = self.view.write();
            view.modal_open = true;
            if !view.analysis.is_pending() {
                view.analysis = AnalysisPhase::Idle;
            }
        }
        self.metrics.record_state_transition();
        tracing::debug!("Entry modal opened");
    }

    /// Close the add-entry modal and reset the draft
    pub fn close_entry_modal(&self) {
        {
            let mut view = self.view.write();
            view.modal_open = false;
            view.draft = DraftEntry::empty(self.default_mood());
        }
        self.metrics.record_state_transition();
        tracing::debug!("Entry modal closed");
    }

    /// Replace the draft text
    pub fn set_draft_text(&self, text: String) {
        self.view.write().draft.text = text;
        self.metrics.record_state_transition();
    }

    /// Update the draft mood. Out-of-range values clamp onto the scale.
    pub fn set_draft_mood(&self, mood: u8) {
        self.view.write().draft.mood = MoodScore::clamped(mood);
        self.metrics.record_state_transition();
    }

    pub fn cycle_day(&self) -> u32 {
        *self.cycle_day.read()
    }

    /// Move the cycle reference day. Values clamp onto the charted range.
    pub fn set_cycle_day(&self, day: u32) {
        let clamped = day.clamp(1, self.config.chart_days.max(1));
        *self.cycle_day.write() = clamped;
        self.metrics.record_state_transition();
        tracing::debug!(day = clamped, "Cycle day set");
    }

    /// Validate the draft and move the analysis lifecycle to Pending,
    /// returning the draft the task should work from. Check-and-set runs
    /// under one write lock so concurrent submissions cannot both proceed.
    pub fn begin_analysis(&self) -> Result<DraftEntry, MoodcastError> {
        let mut view = self.view.write();
        if view.analysis.is_pending() {
            return Err(MoodcastError::AnalysisPending);
        }
        if view.draft.text.trim().is_empty() {
            return Err(MoodcastError::EmptyDraftSubmission);
        }
        view.analysis = AnalysisPhase::Pending {
            since: Utc::now().timestamp_millis(),
        };
        Ok(view.draft.clone())
    }

    /// Commit a resolved analysis: append the entry, close the modal, reset
    /// the draft, and land on the timeline.
    pub fn commit_entry(&self, draft: &DraftEntry, insight: Insight) -> Entry {
        let now = Utc::now();
        let entry = {
            let mut journal = self.journal.write();
            let entry = Entry {
                id: journal.next_id(now.timestamp_millis()),
                date: now.date_naive(),
                time: now.format("%H:%M").to_string(),
                kind: EntryKind::Manual,
                mood: draft.mood,
                text: draft.text.clone(),
                derived_note: insight.note,
                tags: insight.tags,
            };
            journal.prepend(entry.clone());
            entry
        };

        {
            let mut view = self.view.write();
            view.analysis = AnalysisPhase::Resolved { entry_id: entry.id };
            view.modal_open = false;
            view.draft = DraftEntry::empty(self.default_mood());
            view.active_tab = Tab::Timeline;
        }
        self.metrics.record_entry_submitted();
        self.metrics.record_state_transition();
        tracing::info!(entry_id = entry.id, mood = %entry.mood, "Entry committed");
        entry
    }

    /// Mark the running analysis as cancelled. The modal stays open and the
    /// draft is retained so the user can resubmit.
    pub fn mark_analysis_cancelled(&self) {
        let mut view = self.view.write();
        if view.analysis.is_pending() {
            view.analysis = AnalysisPhase::Cancelled;
            drop(view);
            self.metrics.record_analysis_cancelled();
            tracing::info!("Analysis cancelled");
        }
    }

    /// Register the cancel handle for a spawned analysis task
    pub fn set_inflight(&self, cancel: oneshot::Sender<()>, started_at: i64) {
        *self.inflight.write() = Some(InflightAnalysis { cancel, started_at });
    }

    /// Take the cancel handle, leaving nothing in flight
    pub fn take_inflight(&self) -> Option<InflightAnalysis> {
        self.inflight.write().take()
    }

    /// Drop the cancel handle once the task settles
    pub fn clear_inflight(&self) {
        *self.inflight.write() = None;
    }

    /// The journal, newest first
    pub fn entries(&self) -> Vec<Entry> {
        self.journal.read().to_vec()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
