pub mod engine;
pub mod perf;

use serde::{Deserialize, Serialize};

/// What the simulated analysis derives from a draft: the note shown under
/// the entry and the tags attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub note: String,
    pub tags: Vec<String>,
}
