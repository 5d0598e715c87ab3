//! Recorder Configuration

use serde::{Deserialize, Serialize};

/// What gets written into history on each flush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordMode {
    /// Mean of every sample recorded since the previous flush
    #[default]
    Averaging,
    /// The sample that triggered the flush, ignoring the accumulator
    Instantaneous,
}

/// Recorder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Whole seconds that must pass (strictly) before the next flush
    pub interval_secs: u64,
    /// Flush semantics
    pub mode: RecordMode,
    /// Fill every history slot with the first value on `init`
    pub seed_history_on_init: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            mode: RecordMode::Averaging,
            seed_history_on_init: true,
        }
    }
}
