//! Trimmed-Mean Filter for Jitter Reduction

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::Smoother;
use tracing::debug;

/// Sliding window filter that drops the lowest and highest samples before
/// averaging the rest.
///
/// `N` is the window length and must be odd and at least 3. The number of
/// samples discarded at each end is derived from `keep_fraction`, with at
/// least one sample always dropped from the bottom and from the top.
///
/// Until [`seed`](Self::seed) is called the window holds zeros, so early
/// outputs are biased towards zero. This is a cold-start condition, not an
/// error.
#[derive(Debug, Clone)]
pub struct TrimmedMeanFilter<const N: usize> {
    window: [i32; N],
    write_index: usize,
    keep_fraction: f64,
    bottom: usize,
    top: usize,
    seeded: bool,
}

impl<const N: usize> TrimmedMeanFilter<N> {
    /// Smallest usable window
    pub const MIN_WINDOW: usize = 3;

    /// Create a filter keeping `keep_fraction` of each sorted window
    pub fn new(keep_fraction: f64) -> Result<Self, FilterError> {
        if N < Self::MIN_WINDOW {
            return Err(FilterError::WindowTooSmall {
                size: N,
                min: Self::MIN_WINDOW,
            });
        }
        if N % 2 == 0 {
            return Err(FilterError::EvenWindow(N));
        }
        if !keep_fraction.is_finite() || keep_fraction <= 0.0 || keep_fraction >= 1.0 {
            return Err(FilterError::InvalidKeepFraction(keep_fraction));
        }

        let (bottom, top) = trim_bounds(N, keep_fraction);
        if bottom >= top {
            return Err(FilterError::DegenerateTrim { bottom, top });
        }

        Ok(Self {
            window: [0; N],
            write_index: 0,
            keep_fraction,
            bottom,
            top,
            seeded: false,
        })
    }

    /// Create a filter from configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::new(config.keep_fraction)
    }

    /// Fill the whole window with `value`
    pub fn seed(&mut self, value: i32) {
        self.window = [value; N];
        self.seeded = true;
    }

    /// Add a raw sample and get the trimmed mean of the window
    pub fn push(&mut self, value: i32) -> i32 {
        if !self.seeded && self.write_index == 0 {
            debug!("Trimmed-mean filter used before seeding, output biased towards zero");
        }

        self.window[self.write_index] = value;
        self.write_index = (self.write_index + 1) % N;

        let mut sorted = self.window;
        sorted.sort_unstable();

        let kept = &sorted[self.bottom..self.top];
        let total: i64 = kept.iter().map(|&v| i64::from(v)).sum();
        // bottom < top is checked in new(), and the mean of i32 values fits in i32
        (total / kept.len() as i64) as i32
    }

    /// Zero the window and forget any seed
    pub fn reset(&mut self) {
        self.window = [0; N];
        self.write_index = 0;
        self.seeded = false;
    }

    /// Sorted-index range `[bottom, top)` that is averaged
    pub fn trim_bounds(&self) -> (usize, usize) {
        (self.bottom, self.top)
    }

    /// Number of samples averaged on every push
    pub fn retained(&self) -> usize {
        self.top - self.bottom
    }

    pub fn keep_fraction(&self) -> f64 {
        self.keep_fraction
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Raw window in slot order (not sorted, not oldest-first)
    pub fn window(&self) -> &[i32; N] {
        &self.window
    }
}

impl<const N: usize> Smoother for TrimmedMeanFilter<N> {
    fn seed(&mut self, value: i32) {
        TrimmedMeanFilter::seed(self, value);
    }

    fn push(&mut self, value: i32) -> i32 {
        TrimmedMeanFilter::push(self, value)
    }

    fn reset(&mut self) {
        TrimmedMeanFilter::reset(self);
    }
}

/// Compute the retained sorted-index range for a window of `len` samples.
///
/// `bottom = max(floor(len * (1 - keep)), 1)` and
/// `top = min(floor(len * keep) + 1, len - 1)`. The `+ 1` offsets the
/// asymmetry introduced by flooring both ends.
pub fn trim_bounds(len: usize, keep_fraction: f64) -> (usize, usize) {
    let n = len as f64;
    let bottom = ((n * (1.0 - keep_fraction)).floor() as usize).max(1);
    let top = ((n * keep_fraction).floor() as usize + 1).min(len.saturating_sub(1));
    (bottom, top)
}
