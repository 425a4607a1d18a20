/// A bucket pairs an upper boundary with the cumulative count of observations
/// recorded below that boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    pub(crate) upper: f64,
    pub(crate) count: u64,
}

impl Bucket {
    /// Returns the exclusive upper boundary of this bucket. Observations
    /// exactly equal to the boundary belong to the next bucket up. The final
    /// bucket of a distribution has a boundary of positive infinity.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the number of observations recorded below this bucket's
    /// boundary. Counts are cumulative, so the count of the final bucket is
    /// the total number of observations.
    pub fn count(&self) -> u64 {
        self.count
    }
}
