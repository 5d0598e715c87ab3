//! Sensor Sample Smoothing
//!
//! Fixed-capacity filters that turn jittery integer sensor readings into
//! stable values. All storage is inline; no filter allocates after
//! construction.

mod config;
mod error;
mod moving;
mod trimmed;

pub use config::{FilterConfig, DEFAULT_KEEP_FRACTION};
pub use error::FilterError;
pub use moving::MovingAverage;
pub use trimmed::{trim_bounds, TrimmedMeanFilter};

/// One-sample-in, one-value-out smoothing filter
pub trait Smoother {
    /// Fill the window so the next output is `value`
    fn seed(&mut self, value: i32);

    /// Add a raw sample and get the smoothed value
    fn push(&mut self, value: i32) -> i32;

    /// Return to the unseeded state
    fn reset(&mut self);
}
