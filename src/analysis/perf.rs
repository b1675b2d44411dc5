/// Latency timing for analysis pipeline stages
use std::time::Instant;

/// Timer for a pipeline stage, logging its duration on drop
pub struct PerfTimer {
    stage: &'static str,
    start: Instant,
}

impl PerfTimer {
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        tracing::debug!(
            stage = self.stage,
            duration_ms = self.elapsed_ms(),
            "Stage timing"
        );
    }
}
