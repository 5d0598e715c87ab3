//! Filter Configuration

use serde::{Deserialize, Serialize};

/// Keep fraction used by the reference 13-sample window
pub const DEFAULT_KEEP_FRACTION: f64 = 0.85;

/// Trimmed-mean filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Fraction of the sorted window kept after trimming (0-1, exclusive)
    pub keep_fraction: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keep_fraction: DEFAULT_KEEP_FRACTION,
        }
    }
}
