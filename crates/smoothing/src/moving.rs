//! Running-Total Moving Average

use crate::error::FilterError;
use crate::Smoother;

/// Plain moving average over the last `N` samples.
///
/// Keeps a running total so each push costs O(1). Like the trimmed-mean
/// filter, the window starts zeroed until seeded.
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize> {
    window: [i32; N],
    index: usize,
    total: i64,
}

impl<const N: usize> MovingAverage<N> {
    /// Create a new moving average
    pub fn new() -> Result<Self, FilterError> {
        if N == 0 {
            return Err(FilterError::WindowTooSmall { size: N, min: 1 });
        }
        Ok(Self {
            window: [0; N],
            index: 0,
            total: 0,
        })
    }

    /// Fill the whole window with `value`
    pub fn seed(&mut self, value: i32) {
        self.window = [value; N];
        self.total = i64::from(value) * N as i64;
    }

    /// Replace the oldest sample and get the current average
    pub fn push(&mut self, value: i32) -> i32 {
        self.total -= i64::from(self.window[self.index]);
        self.window[self.index] = value;
        self.total += i64::from(value);
        self.index = (self.index + 1) % N;

        (self.total / N as i64) as i32
    }

    /// Zero the window
    pub fn reset(&mut self) {
        self.window = [0; N];
        self.index = 0;
        self.total = 0;
    }

    /// Current average without adding a sample
    pub fn average(&self) -> i32 {
        (self.total / N as i64) as i32
    }
}

impl<const N: usize> Smoother for MovingAverage<N> {
    fn seed(&mut self, value: i32) {
        MovingAverage::seed(self, value);
    }

    fn push(&mut self, value: i32) -> i32 {
        MovingAverage::push(self, value)
    }

    fn reset(&mut self) {
        MovingAverage::reset(self);
    }
}
