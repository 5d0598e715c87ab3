//! Filter Error Types

use thiserror::Error;

/// Errors raised when constructing a filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Trimmed-mean window must have an odd number of slots
    #[error("Window size {0} must be odd")]
    EvenWindow(usize),

    /// Window is smaller than the filter can work with
    #[error("Window size {size} is below the minimum of {min}")]
    WindowTooSmall { size: usize, min: usize },

    /// Keep fraction outside the open interval (0, 1)
    #[error("Keep fraction {0} must lie strictly between 0 and 1")]
    InvalidKeepFraction(f64),

    /// Trim bounds leave no samples to average
    #[error("Trim bounds [{bottom}, {top}) retain no samples")]
    DegenerateTrim { bottom: usize, top: usize },
}
