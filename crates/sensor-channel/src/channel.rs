//! Sensor Channel: filter into recorder

use crate::config::ChannelConfig;
use crate::error::ChannelError;
use sensor_record::{Clock, MonotonicClock, TimeWindowedRecorder};
use smoothing::{Smoother, TrimmedMeanFilter};
use tracing::{debug, info};

/// Trimmed-mean window used for temperature channels
pub const FILTER_WINDOW: usize = 13;

/// History length, one slot per column of a 16x2 character display
pub const HISTORY_LEN: usize = 16;

/// Standard temperature channel
pub type TemperatureChannel<C = MonotonicClock> =
    SensorChannel<TrimmedMeanFilter<FILTER_WINDOW>, HISTORY_LEN, C>;

/// Result of feeding one raw sample through a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Smoothed value handed to the recorder
    pub filtered: i32,
    /// Whether the recorder flushed into history on this tick
    pub flushed: bool,
}

/// One physical sensor: a smoothing filter feeding a history recorder
#[derive(Debug)]
pub struct SensorChannel<S, const M: usize, C = MonotonicClock> {
    name: String,
    smoother: S,
    recorder: TimeWindowedRecorder<M, C>,
    last_filtered: Option<i32>,
}

impl<S: Smoother, const M: usize, C: Clock> SensorChannel<S, M, C> {
    /// Create a channel from already-built parts
    pub fn new(name: impl Into<String>, smoother: S, recorder: TimeWindowedRecorder<M, C>) -> Self {
        let name = name.into();
        info!(
            "Creating sensor channel {} ({} history slots, {}s interval)",
            name,
            M,
            recorder.interval_secs()
        );
        Self {
            name,
            smoother,
            recorder,
            last_filtered: None,
        }
    }

    /// Seed the filter and start the recorder from one trusted reading
    pub fn prime(&mut self, value: i32) {
        debug!("Priming channel {} with {}", self.name, value);
        self.smoother.seed(value);
        self.recorder.init(value);
        self.last_filtered = Some(value);
    }

    /// Smooth one raw reading and pass it to the recorder
    pub fn tick(&mut self, raw: i32) -> TickOutcome {
        let filtered = self.smoother.push(raw);
        let flushed = self.recorder.record(filtered);
        self.last_filtered = Some(filtered);

        TickOutcome { filtered, flushed }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn smoother(&self) -> &S {
        &self.smoother
    }

    pub fn recorder(&self) -> &TimeWindowedRecorder<M, C> {
        &self.recorder
    }

    /// Most recent filtered value, if the channel has produced one
    pub fn last_filtered(&self) -> Option<i32> {
        self.last_filtered
    }
}

impl<const N: usize, const M: usize, C: Clock> SensorChannel<TrimmedMeanFilter<N>, M, C> {
    /// Build a trimmed-mean channel from configuration
    pub fn from_config(config: &ChannelConfig, clock: C) -> Result<Self, ChannelError> {
        config.validate()?;
        let filter = TrimmedMeanFilter::from_config(&config.filter)?;
        let recorder = TimeWindowedRecorder::new(&config.recorder, clock)?;
        Ok(Self::new(config.name.clone(), filter, recorder))
    }
}
