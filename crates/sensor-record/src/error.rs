//! Recorder Error Types

use thiserror::Error;

/// Errors raised when constructing a recorder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecorderError {
    /// History must hold at least one slot
    #[error("History capacity must be at least 1")]
    ZeroCapacity,
}
