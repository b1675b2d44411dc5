use chrono::Utc;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::analysis::{perf, Insight};
use crate::cache::{cache_insight, get_cached};
use crate::cycle::phase::is_high_variance_phase;
use crate::error::MoodcastError;
use crate::journal::Entry;
use crate::state::app::AppState;
use crate::state::view::DraftEntry;

/// The note every simulated analysis produces.
const EMPATHY_NOTE: &str = "Reads as a classic empathy-seeking signal. No fix wanted: \
     acknowledge the feeling and take her side.";

/// Compose the insight for a draft. The note is fixed; the tags mark the
/// auto-tagging pass plus the phase when the day sits in the volatile window.
pub fn compose_insight(cycle_day: u32) -> Insight {
    let mut tags = vec!["auto-tag".to_string()];
    if is_high_variance_phase(cycle_day) {
        tags.push("pms-window".to_string());
    }
    Insight {
        note: EMPATHY_NOTE.to_string(),
        tags,
    }
}

/// Run the simulated analysis: serve from cache when the same draft was
/// analyzed before, otherwise wait out the configured delay and derive the
/// insight fresh.
pub async fn run_analysis(state: &AppState, draft: &DraftEntry, cycle_day: u32) -> Insight {
    let _perf = perf::PerfTimer::new("analysis_total");

    if let Some(cached) = get_cached::<Insight>(state, draft.mood, &draft.text) {
        state.metrics.record_cache_hit();
        tracing::info!(mood = %draft.mood, "Analysis served from cache");
        return cached;
    }
    state.metrics.record_cache_miss();

    tokio::time::sleep(tokio::time::Duration::from_millis(
        state.config.analysis_delay_ms,
    ))
    .await;

    let insight = compose_insight(cycle_day);
    if let Err(e) = cache_insight(state, draft.mood, &draft.text, &insight) {
        tracing::warn!(error = %e, "Failed to cache insight");
    }
    insight
}

/// Validate the draft, flip the view to Pending, and spawn the deferred
/// analysis as a cancellable task. The handle resolves to the committed
/// entry, or to `AnalysisCancelled` when the cancel signal wins the race.
pub fn spawn_analysis(
    state: &Arc<AppState>,
) -> Result<JoinHandle<Result<Entry, MoodcastError>>, MoodcastError> {
    let draft = state.begin_analysis()?;
    let (cancel_tx, cancel_rx) = oneshot::channel();
    state.set_inflight(cancel_tx, Utc::now().timestamp_millis());

    let task_state = Arc::clone(state);
    let handle = tokio::spawn(async move {
        let cycle_day = task_state.cycle_day();
        let result = tokio::select! {
            // Cancellation takes priority when both branches are ready
            biased;
            _ = cancel_rx => {
                task_state.mark_analysis_cancelled();
                Err(MoodcastError::AnalysisCancelled)
            }
            insight = run_analysis(&task_state, &draft, cycle_day) => {
                Ok(task_state.commit_entry(&draft, insight))
            }
        };
        task_state.clear_inflight();
        result
    });

    tracing::info!("Analysis task spawned");
    Ok(handle)
}

/// Cancel the in-flight analysis task, if any. Returns whether a task was
/// signalled before it committed.
pub fn cancel_analysis(state: &AppState) -> bool {
    match state.take_inflight() {
        Some(inflight) => {
            let signalled = inflight.cancel.send(()).is_ok();
            if signalled {
                let waited_ms = Utc::now().timestamp_millis() - inflight.started_at;
                tracing::info!(waited_ms = waited_ms, "Cancel signalled");
            } else {
                tracing::debug!("Cancel arrived after the analysis settled");
            }
            signalled
        }
        None => false,
    }
}
