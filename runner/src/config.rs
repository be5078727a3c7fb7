//! Run configuration: engine options plus pacing.

use std::time::Duration;

use searchlab_engine::RunOptions;

/// Configuration for one run.
///
/// The engine options travel to the session unchanged; the step delay is
/// consumed only by the driver's pacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub options: RunOptions,
    /// Pause between suspension points, purely for human-paced display.
    pub step_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            options: RunOptions::default(),
            step_delay: Duration::from_millis(300),
        }
    }
}

impl RunConfig {
    /// Configuration echo for the UI.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.options.algorithm.as_str(),
            "log_skipped_duplicates": self.options.log_skipped_duplicates,
            "root_is_max": self.options.root_is_max,
            "step_delay_ms": u64::try_from(self.step_delay.as_millis()).unwrap_or(u64::MAX),
            "tree_search": self.options.tree_search,
        })
    }
}
