use thiserror::Error;

/// Errors returned when constructing a `Distribution`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("the number of buckets must be at least one")]
    ZeroBuckets,
    #[error("the bucket width must be positive and finite")]
    InvalidWidth,
    #[error("the initial value must be positive and finite")]
    InvalidInitial,
    #[error("the growth factor must be positive and finite")]
    InvalidFactor,
    #[error("bucket boundaries must be positive and finite")]
    InvalidBoundary,
    #[error("bucket boundaries must be strictly increasing")]
    BoundariesNotIncreasing,
}

/// Errors returned when querying a `Distribution`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("percentile must be in the range 0.0..=100.0")]
    InvalidPercentile,
}
