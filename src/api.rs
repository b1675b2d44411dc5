use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::analysis::engine;
use crate::analytics::{self, FactorCorrelation, JournalStats};
use crate::cycle::generator::{self, CycleSeries};
use crate::dashboard::{build_summary, DashboardSummary};
use crate::error::MoodcastError;
use crate::journal::Entry;
use crate::metrics::MetricsSnapshot;
use crate::state::app::AppState;
use crate::state::view::{log_view_state, Tab, ViewState};

/// Snapshot of the chrome state the shell renders from
pub fn view_state(state: &AppState) -> ViewState {
    state.view()
}

pub fn select_tab(state: &AppState, tab: Tab) {
    state.select_tab(tab);
    log_view_state(state);
}

pub fn open_entry_modal(state: &AppState) {
    state.open_entry_modal();
    log_view_state(state);
}

pub fn close_entry_modal(state: &AppState) {
    state.close_entry_modal();
    log_view_state(state);
}

pub fn set_draft_text(state: &AppState, text: String) {
    state.set_draft_text(text);
}

pub fn set_draft_mood(state: &AppState, mood: u8) {
    state.set_draft_mood(mood);
}

pub fn set_cycle_day(state: &AppState, day: u32) {
    state.set_cycle_day(day);
}

/// The observation log, newest first
pub fn entries(state: &AppState) -> Vec<Entry> {
    state.entries()
}

/// The forecast chart payload for the trends tab
pub fn cycle_series(state: &AppState) -> CycleSeries {
    CycleSeries {
        points: generator::generate(state.config.chart_days),
        today: state.cycle_day(),
        reference_cycle_days: state.config.reference_cycle_days,
        caption: "Modeled on the last 3 months of records".to_string(),
    }
}

/// The home tab payload
pub fn dashboard(state: &AppState) -> DashboardSummary {
    build_summary(state)
}

/// Journal aggregates for the trends tab
pub fn journal_stats(state: &AppState) -> JournalStats {
    analytics::compute_journal_stats(&state.journal.read())
}

/// The factor correlation table for the trends tab
pub fn key_factors() -> Vec<FactorCorrelation> {
    analytics::key_factors()
}

/// Submit the current draft. Returns the handle of the spawned analysis
/// task; the shell fires and forgets, tests await it.
pub fn submit_entry(
    state: &Arc<AppState>,
) -> Result<JoinHandle<Result<Entry, MoodcastError>>, MoodcastError> {
    engine::spawn_analysis(state)
}

/// Cancel the in-flight analysis, if any. Returns whether a task was
/// signalled.
pub fn cancel_analysis(state: &AppState) -> bool {
    engine::cancel_analysis(state)
}

/// Counter snapshot for debugging overlays
pub fn metrics(state: &AppState) -> MetricsSnapshot {
    state.metrics.snapshot()
}
