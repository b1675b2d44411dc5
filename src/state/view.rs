use serde::{Deserialize, Serialize};

use crate::config::TrackerConfig;
use crate::journal::MoodScore;
use crate::state::app::AppState;

/// The three top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Timeline,
    Trends,
}

/// The add-entry form as the user last left it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub text: String,
    pub mood: MoodScore,
}

impl DraftEntry {
    pub fn empty(default_mood: MoodScore) -> Self {
        DraftEntry {
            text: String::new(),
            mood: default_mood,
        }
    }
}

/// Lifecycle of the deferred analysis behind a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum AnalysisPhase {
    /// No submission since the modal last opened
    Idle,
    /// A deferred analysis task is running
    Pending { since: i64 },
    /// The task committed this entry
    Resolved { entry_id: i64 },
    /// The task was cancelled before committing
    Cancelled,
}

impl AnalysisPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisPhase::Pending { .. })
    }
}

/// Everything the presentation shell needs to render chrome: active tab,
/// modal visibility, the draft, and the analysis lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub active_tab: Tab,
    pub modal_open: bool,
    pub draft: DraftEntry,
    pub analysis: AnalysisPhase,
}

impl ViewState {
    pub fn new(config: &TrackerConfig) -> Self {
        ViewState {
            active_tab: Tab::default(),
            modal_open: false,
            draft: DraftEntry::empty(MoodScore::clamped(config.default_draft_mood)),
            analysis: AnalysisPhase::Idle,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.analysis.is_pending()
    }
}

/// Log the current view state (for debugging)
pub fn log_view_state(state: &AppState) {
    let view = state.view();
    tracing::debug!(
        tab = ?view.active_tab,
        modal_open = view.modal_open,
        pending = view.is_pending(),
        "View state"
    );
}
