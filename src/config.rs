use crate::bucket::Bucket;
use crate::errors::BuildError;

/// A validated set of bucket boundaries: strictly increasing, positive, and
/// finite except for the final boundary, which is always positive infinity.
#[derive(Debug)]
pub struct Config {
    boundaries: Box<[f64]>,
}

impl Config {
    /// Evenly spaced boundaries at `width, 2 * width, ..` with a final
    /// catch-all boundary at positive infinity.
    pub fn linear(num_buckets: usize, width: f64) -> Result<Self, BuildError> {
        if num_buckets == 0 {
            return Err(BuildError::ZeroBuckets);
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(BuildError::InvalidWidth);
        }

        let mut boundaries = Vec::with_capacity(num_buckets);
        for i in 1..num_buckets {
            boundaries.push(i as f64 * width);
        }
        boundaries.push(f64::INFINITY);

        Self::from_boundaries(boundaries)
    }

    /// Geometrically growing boundaries at `initial * factor, initial *
    /// factor^2, ..` with a final catch-all boundary at positive infinity.
    pub fn exponential(
        num_buckets: usize,
        initial: f64,
        factor: f64,
    ) -> Result<Self, BuildError> {
        if num_buckets == 0 {
            return Err(BuildError::ZeroBuckets);
        }
        if !initial.is_finite() || initial <= 0.0 {
            return Err(BuildError::InvalidInitial);
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(BuildError::InvalidFactor);
        }

        let mut boundaries = Vec::with_capacity(num_buckets);
        for i in 0..(num_buckets - 1) {
            boundaries.push(initial * factor.powi(i as i32 + 1));
        }
        boundaries.push(f64::INFINITY);

        Self::from_boundaries(boundaries)
    }

    /// Explicit boundaries. The catch-all boundary at positive infinity is
    /// appended, so an empty slice is allowed and yields a single bucket.
    pub fn custom(boundaries: &[f64]) -> Result<Self, BuildError> {
        let mut all = Vec::with_capacity(boundaries.len() + 1);
        all.extend_from_slice(boundaries);
        all.push(f64::INFINITY);

        Self::from_boundaries(all)
    }

    fn from_boundaries(boundaries: Vec<f64>) -> Result<Self, BuildError> {
        // every boundary except the final catch-all must be positive, finite,
        // and strictly above its predecessor. this also rejects generated
        // ladders that collapse or overflow, such as a growth factor of one.
        let mut prev = 0.0;
        for &boundary in &boundaries[..boundaries.len() - 1] {
            if !boundary.is_finite() || boundary <= 0.0 {
                return Err(BuildError::InvalidBoundary);
            }
            if boundary <= prev {
                return Err(BuildError::BoundariesNotIncreasing);
            }
            prev = boundary;
        }

        Ok(Self {
            boundaries: boundaries.into(),
        })
    }

    /// Materializes the boundaries into zeroed buckets.
    pub fn into_buckets(self) -> Box<[Bucket]> {
        self.boundaries
            .iter()
            .map(|&upper| Bucket { upper, count: 0 })
            .collect()
    }
}
