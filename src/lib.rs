use std::sync::Arc;

pub mod analysis;
pub mod analytics;
pub mod api;
pub mod cache;
pub mod config;
pub mod cycle;
pub mod dashboard;
pub mod error;
pub mod journal;
pub mod logging;
pub mod metrics;
pub mod state;

pub use error::MoodcastError;
pub use state::app::AppState;

/// Wire up logging and build the shared state the embedding shell manages.
pub fn bootstrap() -> Arc<AppState> {
    logging::init_logging();
    tracing::info!("moodcast core starting");

    let state = Arc::new(AppState::new());
    tracing::info!(
        cycle_day = state.cycle_day(),
        entries = state.journal.read().len(),
        "State initialized"
    );
    state
}
