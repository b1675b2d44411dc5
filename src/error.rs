use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::journal::MoodScore;

/// Unified error type for the entire moodcast codebase.
/// All fallible operations return Result<T, MoodcastError> instead of
/// String errors, and the whole enum is serializable so the presentation
/// shell can surface it directly.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum MoodcastError {
    #[error("mood score {0} is out of range ({min}..={max})", min = MoodScore::MIN, max = MoodScore::MAX)]
    InvalidMoodScore(u8),

    #[error("cannot submit an empty draft entry")]
    EmptyDraftSubmission,

    #[error("an analysis is already in progress")]
    AnalysisPending,

    #[error("analysis was cancelled before it completed")]
    AnalysisCancelled,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for MoodcastError {
    fn from(err: anyhow::Error) -> Self {
        MoodcastError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for MoodcastError {
    fn from(err: serde_json::Error) -> Self {
        MoodcastError::Internal(format!("JSON error: {}", err))
    }
}
