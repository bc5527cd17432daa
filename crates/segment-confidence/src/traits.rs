//! Core trait for confidence interval estimation

use crate::types::{ConfidenceInterval, ConfidenceLevel};
use segment_core::{Result, Sample};

/// A method for constructing a confidence interval around a sample statistic.
///
/// The trait is the seam between interval construction and its consumers:
/// group comparison and the precision profile are generic over it, so the
/// CLT estimator can be swapped out without touching either.
pub trait IntervalEstimator {
    /// Calculate the confidence interval for the given sample
    fn interval(&self, sample: &Sample) -> Result<ConfidenceInterval>;

    /// Get the confidence level this estimator was configured with
    fn confidence_level(&self) -> ConfidenceLevel;
}
