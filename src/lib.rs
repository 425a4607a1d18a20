//! This crate contains a bucketed distribution datastructure for summarizing
//! a stream of gauge observations, for example request latencies or queue
//! depths, without retaining the individual samples.
//!
//! A [`Distribution`] sorts each observation into a fixed series of buckets
//! and keeps a running sum. Bucket counts are cumulative, so percentile
//! estimates reduce to a binary search for the lowest bucket boundary that
//! covers the requested share of observations, and the arithmetic mean falls
//! out of the sum and the total count. The estimates are as coarse as the
//! bucket layout: every reported quantile is one of the configured
//! boundaries.
//!
//! Bucket boundaries are laid out by one of three policies:
//! * evenly spaced, via [`Distribution::new_linear`]
//! * geometrically growing, via [`Distribution::new_exponential`]
//! * caller provided, via [`Distribution::new_custom`]
//!
//! Each policy ends the series with a bucket whose boundary is positive
//! infinity, so every layout covers the full range of finite observations.
//!
//! All operations take `&self` and synchronize on a lock internal to each
//! instance, so a distribution shared behind an `Arc` can serve concurrent
//! writers and readers.

mod bucket;
mod config;
mod distribution;
mod errors;

pub use bucket::Bucket;
pub use distribution::Distribution;
pub use errors::{BuildError, Error};
