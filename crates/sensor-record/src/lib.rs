//! Sensor History Recording
//!
//! Condenses a stream of filtered samples into a fixed number of
//! interval averages with running min/max, ready to be drawn as a trend.

mod clock;
mod config;
mod error;
mod recorder;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{RecordMode, RecorderConfig};
pub use error::RecorderError;
pub use recorder::{is_set, HistorySnapshot, TimeWindowedRecorder, UNSET};
