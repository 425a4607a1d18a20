use crate::bucket::Bucket;
use crate::config::Config;
use crate::errors::{BuildError, Error};

use parking_lot::Mutex;

/// A distribution summarizes gauge observations in a fixed series of buckets,
/// keeping a running sum so that percentile estimates and the arithmetic mean
/// can be produced without retaining individual samples.
///
/// Bucket counts are cumulative: each bucket counts every observation
/// strictly below its upper boundary, and the final boundary is positive
/// infinity, so the final count is the total number of observations. The
/// counts form a non-decreasing sequence, which lets percentile queries
/// binary search for the lowest boundary covering the requested share of
/// observations.
///
/// Every operation takes `&self` and synchronizes on an internal per-instance
/// lock, so a distribution can be shared across threads behind an `Arc` and
/// serve concurrent writers and readers.
#[derive(Debug)]
pub struct Distribution {
    state: Mutex<State>,
}

#[derive(Clone, Debug, PartialEq)]
struct State {
    buckets: Box<[Bucket]>,
    sum: f64,
}

impl State {
    fn record(&mut self, value: f64) {
        // walk down from the catch-all bucket, incrementing every bucket the
        // value falls below. the comparison is strict, so a value exactly on
        // a boundary belongs to the next bucket up. for NaN no comparison
        // holds and no counter moves.
        for bucket in self.buckets.iter_mut().rev() {
            if bucket.upper > value {
                bucket.count += 1;
            } else {
                break;
            }
        }

        self.sum += value;
    }

    fn total(&self) -> u64 {
        // counts are cumulative and there is always at least one bucket, so
        // the final count is the number of recorded observations
        self.buckets[self.buckets.len() - 1].count
    }
}

impl Distribution {
    /// Constructs a distribution with `num_buckets` evenly sized buckets:
    /// bucket `i` has the upper boundary `(i + 1) * width`, except the final
    /// bucket, whose boundary is positive infinity.
    ///
    /// # Errors
    /// * `num_buckets` must be at least one
    /// * `width` must be positive and finite
    pub fn new_linear(num_buckets: usize, width: f64) -> Result<Self, BuildError> {
        Config::linear(num_buckets, width).map(Self::from_config)
    }

    /// Constructs a distribution with geometrically growing buckets: bucket
    /// `i` has the upper boundary `initial * factor^(i + 1)`, so the first
    /// boundary is `initial * factor` and each subsequent boundary grows by
    /// `factor`. The final bucket's boundary is positive infinity.
    ///
    /// # Errors
    /// * `num_buckets` must be at least one
    /// * `initial` and `factor` must be positive and finite
    /// * the generated boundaries must remain finite and strictly increasing,
    ///   which rules out a factor of one for more than two buckets
    pub fn new_exponential(
        num_buckets: usize,
        initial: f64,
        factor: f64,
    ) -> Result<Self, BuildError> {
        Config::exponential(num_buckets, initial, factor).map(Self::from_config)
    }

    /// Constructs a distribution from explicit bucket boundaries. A final
    /// bucket with a boundary of positive infinity is appended, so the
    /// distribution has `boundaries.len() + 1` buckets. An empty slice is
    /// allowed and yields a single catch-all bucket, which can still count
    /// observations but offers no resolution for percentile estimates.
    ///
    /// # Errors
    /// * every boundary must be positive, finite, and strictly greater than
    ///   the boundary before it
    pub fn new_custom(boundaries: &[f64]) -> Result<Self, BuildError> {
        Config::custom(boundaries).map(Self::from_config)
    }

    fn from_config(config: Config) -> Self {
        Self {
            state: Mutex::new(State {
                buckets: config.into_buckets(),
                sum: 0.0,
            }),
        }
    }

    /// Records one observation: every bucket whose boundary lies strictly
    /// above the value is incremented, and the value is added to the running
    /// sum.
    ///
    /// Values are not range checked. Negative values count toward every
    /// bucket. `f64::INFINITY` counts toward no bucket while still driving
    /// the sum to infinity. `f64::NAN` counts toward no bucket and poisons
    /// the sum, so the average becomes NaN as well.
    pub fn update(&self, value: f64) {
        self.state.lock().record(value);
    }

    /// Returns the upper boundary of the lowest bucket whose cumulative
    /// count reaches `percentile` percent of the total observation count,
    /// with the target rank truncated to a whole number of observations.
    /// The estimate is always one of the configured boundaries, not an
    /// interpolated value, and on an empty distribution it is the lowest
    /// boundary.
    ///
    /// # Errors
    /// * `percentile` must be in the range `0.0..=100.0`
    pub fn percentile(&self, percentile: f64) -> Result<f64, Error> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(Error::InvalidPercentile);
        }

        let state = self.state.lock();

        // counts never decrease, so the buckets below the target rank form a
        // prefix and the answer is the partition point. the target can never
        // exceed the final count, which keeps the index in range.
        let target = (percentile / 100.0 * state.total() as f64) as u64;
        let index = state.buckets.partition_point(|bucket| bucket.count < target);

        Ok(state.buckets[index].upper)
    }

    /// Returns the arithmetic mean of all recorded observations, or NaN if
    /// nothing has been recorded yet.
    pub fn average(&self) -> f64 {
        let state = self.state.lock();

        state.sum / state.total() as f64
    }

    /// Returns a consistent snapshot of all buckets, lowest boundary first.
    pub fn buckets(&self) -> Vec<Bucket> {
        self.state.lock().buckets.to_vec()
    }

    /// Returns the bucket boundaries, lowest first. The final boundary is
    /// always positive infinity.
    pub fn boundaries(&self) -> Vec<f64> {
        self.state
            .lock()
            .buckets
            .iter()
            .map(|bucket| bucket.upper)
            .collect()
    }

    /// Returns the cumulative bucket counts, lowest bucket first.
    pub fn counts(&self) -> Vec<u64> {
        self.state
            .lock()
            .buckets
            .iter()
            .map(|bucket| bucket.count)
            .collect()
    }

    /// Returns the number of buckets.
    pub fn num_buckets(&self) -> usize {
        self.state.lock().buckets.len()
    }

    /// Returns the sum of all recorded observations.
    pub fn sum(&self) -> f64 {
        self.state.lock().sum
    }

    /// Returns the total number of recorded observations.
    pub fn count(&self) -> u64 {
        self.state.lock().total()
    }
}

impl Clone for Distribution {
    fn clone(&self) -> Self {
        // deep copy taken under the lock. the clone gets its own lock and
        // shares no storage with the original.
        let state = self.state.lock().clone();

        Self {
            state: Mutex::new(state),
        }
    }
}

impl PartialEq for Distribution {
    /// Two distributions are equal when they have the same boundaries and
    /// counts bucket for bucket and the same sum. The comparison follows IEEE
    /// 754, so a distribution whose sum was poisoned by a NaN update does not
    /// compare equal to anything, itself included.
    fn eq(&self, other: &Self) -> bool {
        // the lock is not reentrant, so comparing an instance against itself
        // must not lock twice
        if core::ptr::eq(self, other) {
            return true;
        }

        // lock in address order so two threads comparing the same pair from
        // opposite directions cannot deadlock
        let (first, second) = if (self as *const Self) < (other as *const Self) {
            (self, other)
        } else {
            (other, self)
        };

        let first = first.state.lock();
        let second = second.state.lock();

        *first == *second
    }
}
