//! Channel Error Types

use smoothing::FilterError;
use sensor_record::RecorderError;
use thiserror::Error;

/// Errors while building or feeding a sensor channel
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Smoothing filter rejected its parameters
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// History recorder rejected its parameters
    #[error("Recorder error: {0}")]
    Recorder(#[from] RecorderError),

    /// Configuration could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration was read but is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Raw reading outside the converter's range
    #[error("ADC reading {value} exceeds {max}")]
    AdcOutOfRange { value: u16, max: u16 },
}
