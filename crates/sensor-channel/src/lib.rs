//! Sensor Channel Pipeline
//!
//! Wires a smoothing filter into a history recorder for each physical
//! sensor: raw reading in, filtered value out, with the recorder flushing
//! interval averages into its history on its own schedule.

mod channel;
mod config;
mod conversion;
mod error;

pub use channel::{SensorChannel, TemperatureChannel, TickOutcome, FILTER_WINDOW, HISTORY_LEN};
pub use config::{ChannelConfig, ENV_PREFIX};
pub use conversion::{adc_to_centi_celsius, centi_celsius_to_centi_fahrenheit, ADC_MAX};
pub use error::ChannelError;

pub use sensor_record::{
    Clock, HistorySnapshot, ManualClock, MonotonicClock, RecordMode, RecorderConfig,
    TimeWindowedRecorder, UNSET,
};
pub use smoothing::{FilterConfig, MovingAverage, Smoother, TrimmedMeanFilter};
