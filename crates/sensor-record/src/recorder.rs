//! Time-Windowed History Recorder

use crate::clock::{Clock, MonotonicClock};
use crate::config::{RecordMode, RecorderConfig};
use crate::error::RecorderError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Marker for a history slot that has never been written
pub const UNSET: i32 = -1;

/// Whether a history value holds a real reading
#[inline]
pub fn is_set(value: i32) -> bool {
    value >= 0
}

/// Fixed-length history of periodically flushed readings.
///
/// Every call to [`record`](Self::record) feeds the running accumulator.
/// Once more than `interval_secs` whole seconds have passed since the last
/// flush, the accumulated value is appended at the tail of `history`, the
/// oldest slot drops off the front, and min/max are recomputed from the
/// slots that hold readings.
///
/// Samples must be non-negative; negative values collide with [`UNSET`].
#[derive(Debug, Clone)]
pub struct TimeWindowedRecorder<const M: usize, C = MonotonicClock> {
    history: [i32; M],
    running_sum: i64,
    running_count: u32,
    interval_secs: u64,
    mode: RecordMode,
    seed_history_on_init: bool,
    last_flush_ms: u64,
    max_recorded: i32,
    min_recorded: i32,
    clock: C,
}

impl<const M: usize, C: Clock> TimeWindowedRecorder<M, C> {
    /// Create a recorder reading time from `clock`
    pub fn new(config: &RecorderConfig, clock: C) -> Result<Self, RecorderError> {
        if M == 0 {
            return Err(RecorderError::ZeroCapacity);
        }

        Ok(Self {
            history: [UNSET; M],
            running_sum: 0,
            running_count: 0,
            interval_secs: config.interval_secs,
            mode: config.mode,
            seed_history_on_init: config.seed_history_on_init,
            last_flush_ms: 0,
            max_recorded: 0,
            min_recorded: 0,
            clock,
        })
    }

    /// Start recording from `first`: min/max collapse to it and the flush
    /// timer restarts.
    pub fn init(&mut self, first: i32) {
        self.max_recorded = first;
        self.min_recorded = first;
        self.last_flush_ms = self.clock.now_ms();

        if self.seed_history_on_init {
            self.history = [first; M];
        }
    }

    /// Record a sample at the clock's current time. Returns whether a flush
    /// happened.
    pub fn record(&mut self, sample: i32) -> bool {
        let now = self.clock.now_ms();
        self.record_at(sample, now)
    }

    /// Record a sample observed at `now_ms`
    pub fn record_at(&mut self, sample: i32, now_ms: u64) -> bool {
        if !is_set(sample) {
            warn!("Sample {} is negative and will read as an unset slot", sample);
        }

        self.running_sum += i64::from(sample);
        self.running_count += 1;

        let elapsed_secs = now_ms.abs_diff(self.last_flush_ms) / 1000;
        if elapsed_secs > self.interval_secs {
            self.flush(sample, now_ms);
            true
        } else {
            false
        }
    }

    fn flush(&mut self, sample: i32, now_ms: u64) {
        assert!(
            self.running_count > 0,
            "flush with an empty accumulator"
        );

        let value = match self.mode {
            RecordMode::Averaging => (self.running_sum / i64::from(self.running_count)) as i32,
            RecordMode::Instantaneous => sample,
        };

        self.history.copy_within(1.., 0);
        self.history[M - 1] = value;

        let (min, max) = self
            .history
            .iter()
            .copied()
            .filter(|&v| is_set(v))
            .fold((value, value), |(lo, hi), v| (lo.min(v), hi.max(v)));
        self.min_recorded = min;
        self.max_recorded = max;

        debug!(
            "History flushed {} from {} samples (min {}, max {})",
            value, self.running_count, min, max
        );

        self.running_sum = 0;
        self.running_count = 0;
        self.last_flush_ms = now_ms;
    }

    /// Flushed values, oldest first, [`UNSET`] where nothing was recorded
    pub fn history(&self) -> &[i32; M] {
        &self.history
    }

    /// Set history values, oldest first
    pub fn recorded_values(&self) -> impl Iterator<Item = i32> + '_ {
        self.history.iter().copied().filter(|&v| is_set(v))
    }

    /// Largest set history value (or the `init` value before any flush)
    pub fn max_recorded(&self) -> i32 {
        self.max_recorded
    }

    /// Smallest set history value (or the `init` value before any flush)
    pub fn min_recorded(&self) -> i32 {
        self.min_recorded
    }

    pub fn last_flush_ms(&self) -> u64 {
        self.last_flush_ms
    }

    /// Running sum and count waiting for the next flush
    pub fn pending(&self) -> (i64, u32) {
        (self.running_sum, self.running_count)
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn mode(&self) -> RecordMode {
        self.mode
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Owned copy of the history for a renderer
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            history: self.history.to_vec(),
            min: self.min_recorded,
            max: self.max_recorded,
            last_flush_ms: self.last_flush_ms,
        }
    }
}

/// Point-in-time copy of a recorder's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Oldest first, [`UNSET`] for empty slots
    pub history: Vec<i32>,
    pub min: i32,
    pub max: i32,
    pub last_flush_ms: u64,
}

impl HistorySnapshot {
    /// Number of slots holding a reading
    pub fn recorded_len(&self) -> usize {
        self.history.iter().filter(|&&v| is_set(v)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use proptest::prelude::*;

    fn config(interval_secs: u64) -> RecorderConfig {
        RecorderConfig {
            interval_secs,
            seed_history_on_init: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_init_sets_min_max() {
        let clock = ManualClock::new(0);
        let mut recorder = TimeWindowedRecorder::<8, _>::new(&config(60), &clock).unwrap();

        recorder.init(2150);

        assert_eq!(recorder.max_recorded(), 2150);
        assert_eq!(recorder.min_recorded(), 2150);
    }

    #[test]
    fn test_init_seeds_history_by_default() {
        let clock = ManualClock::new(5000);
        let mut recorder =
            TimeWindowedRecorder::<4, _>::new(&RecorderConfig::default(), &clock).unwrap();

        recorder.init(300);

        assert_eq!(recorder.history(), &[300; 4]);
        assert_eq!(recorder.last_flush_ms(), 5000);
    }

    #[test]
    fn test_init_without_seeding_leaves_history_unset() {
        let clock = ManualClock::new(0);
        let mut recorder = TimeWindowedRecorder::<3, _>::new(&config(60), &clock).unwrap();

        recorder.init(300);

        assert_eq!(recorder.history(), &[UNSET; 3]);
    }

    #[test]
    fn test_gate_holds_until_interval_exceeded() {
        let clock = ManualClock::new(0);
        let mut recorder = TimeWindowedRecorder::<4, _>::new(&config(60), &clock).unwrap();
        recorder.init(100);

        clock.set(30_000);
        assert!(!recorder.record(110));
        // Exactly 60 s elapsed is not enough
        clock.set(60_999);
        assert!(!recorder.record(120));

        assert_eq!(recorder.history(), &[UNSET; 4]);
        assert_eq!(recorder.max_recorded(), 100);
        assert_eq!(recorder.min_recorded(), 100);
        assert_eq!(recorder.last_flush_ms(), 0);
        assert_eq!(recorder.pending(), (230, 2));

        clock.set(61_000);
        assert!(recorder.record(130));
        assert_eq!(recorder.history(), &[UNSET, UNSET, UNSET, 120]);
        assert_eq!(recorder.pending(), (0, 0));
        assert_eq!(recorder.last_flush_ms(), 61_000);
    }

    #[test]
    fn test_flush_averages_pending_samples() {
        let mut recorder =
            TimeWindowedRecorder::<2, _>::new(&config(1), ManualClock::new(0)).unwrap();

        recorder.record_at(10, 500);
        recorder.record_at(20, 1000);
        assert!(recorder.record_at(31, 2500));

        // (10 + 20 + 31) / 3 truncates to 20
        assert_eq!(recorder.history(), &[UNSET, 20]);
    }

    #[test]
    fn test_instantaneous_mode_records_trigger_sample() {
        let config = RecorderConfig {
            interval_secs: 1,
            mode: RecordMode::Instantaneous,
            seed_history_on_init: false,
        };
        let mut recorder = TimeWindowedRecorder::<2, _>::new(&config, ManualClock::new(0)).unwrap();

        recorder.record_at(10, 500);
        recorder.record_at(20, 1000);
        recorder.record_at(31, 2500);

        assert_eq!(recorder.history(), &[UNSET, 31]);
        assert_eq!(recorder.pending(), (0, 0));
    }

    #[test]
    fn test_shift_drops_oldest() {
        let mut recorder =
            TimeWindowedRecorder::<4, _>::new(&config(1), ManualClock::new(0)).unwrap();

        for (i, avg) in [10, 20, 30, 40, 50].into_iter().enumerate() {
            let now = (i as u64 + 1) * 2000;
            assert!(recorder.record_at(avg, now));
        }

        assert_eq!(recorder.history(), &[20, 30, 40, 50]);
    }

    #[test]
    fn test_min_max_ignore_unset_slots() {
        let mut recorder =
            TimeWindowedRecorder::<4, _>::new(&config(1), ManualClock::new(0)).unwrap();

        recorder.record_at(50, 2000);
        assert_eq!((recorder.min_recorded(), recorder.max_recorded()), (50, 50));

        recorder.record_at(30, 4000);
        assert_eq!((recorder.min_recorded(), recorder.max_recorded()), (30, 50));
    }

    #[test]
    fn test_min_max_forget_evicted_values() {
        let mut recorder =
            TimeWindowedRecorder::<2, _>::new(&config(1), ManualClock::new(0)).unwrap();

        recorder.record_at(100, 2000);
        recorder.record_at(10, 4000);
        recorder.record_at(50, 6000);

        assert_eq!(recorder.history(), &[10, 50]);
        assert_eq!(recorder.max_recorded(), 50);
        assert_eq!(recorder.min_recorded(), 10);
    }

    #[test]
    fn test_zero_is_a_recorded_value() {
        let mut recorder =
            TimeWindowedRecorder::<3, _>::new(&config(1), ManualClock::new(0)).unwrap();

        recorder.record_at(0, 2000);
        recorder.record_at(5, 4000);

        assert_eq!(recorder.min_recorded(), 0);
        assert_eq!(recorder.recorded_values().collect::<Vec<_>>(), vec![0, 5]);
    }

    #[test]
    fn test_elapsed_uses_absolute_difference() {
        let clock = ManualClock::new(20_000);
        let mut recorder = TimeWindowedRecorder::<2, _>::new(&config(5), &clock).unwrap();
        recorder.init(7);

        // Clock jumped backwards by 10 s
        clock.set(10_000);
        assert!(recorder.record(8));
    }

    #[test]
    fn test_seeded_history_joins_min_max() {
        let clock = ManualClock::new(0);
        let mut recorder =
            TimeWindowedRecorder::<3, _>::new(&RecorderConfig { interval_secs: 1, ..Default::default() }, &clock)
                .unwrap();
        recorder.init(200);

        clock.set(2000);
        recorder.record(260);

        assert_eq!(recorder.history(), &[200, 200, 260]);
        assert_eq!(recorder.min_recorded(), 200);
        assert_eq!(recorder.max_recorded(), 260);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = TimeWindowedRecorder::<0, _>::new(&config(1), ManualClock::new(0)).unwrap_err();
        assert_eq!(err, RecorderError::ZeroCapacity);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut recorder =
            TimeWindowedRecorder::<3, _>::new(&config(1), ManualClock::new(0)).unwrap();
        recorder.record_at(42, 2000);

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.recorded_len(), 1);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["history"], serde_json::json!([-1, -1, 42]));
        assert_eq!(json["min"], 42);
        assert_eq!(json["last_flush_ms"], 2000);
    }

    proptest! {
        #[test]
        fn prop_min_max_match_set_slots(values in proptest::collection::vec(0i32..10_000, 1..40)) {
            let mut recorder =
                TimeWindowedRecorder::<6, _>::new(&config(0), ManualClock::new(0)).unwrap();

            for (i, v) in values.into_iter().enumerate() {
                prop_assert!(recorder.record_at(v, (i as u64 + 1) * 1000));

                let set: Vec<i32> = recorder.recorded_values().collect();
                prop_assert_eq!(recorder.max_recorded(), *set.iter().max().unwrap());
                prop_assert_eq!(recorder.min_recorded(), *set.iter().min().unwrap());
                prop_assert!(recorder.max_recorded() >= recorder.min_recorded());
            }
        }
    }
}
