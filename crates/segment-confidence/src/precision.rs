//! Interval width as a function of sample size
//!
//! Demonstrates the precision side of the CLT: holding the distribution
//! fixed, the interval narrows as the subsample grows.

use crate::traits::IntervalEstimator;
use crate::types::ConfidenceInterval;
use segment_core::{Error, Result, Sample};
use tracing::debug;

/// Interval computed from one seeded subsample of a given size
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionPoint {
    /// Size of the subsample the interval was computed from
    pub size: usize,
    /// The interval at that size
    pub interval: ConfidenceInterval,
}

impl PrecisionPoint {
    /// Width of the interval at this size
    pub fn width(&self) -> f64 {
        self.interval.width()
    }
}

/// Profile interval width across subsample sizes.
///
/// For each requested size, draws one seeded subsample without replacement
/// and estimates an interval over it. Sizes exceeding the sample are
/// skipped with a debug event; the returned points preserve the requested
/// order of the sizes that ran. The same seed reproduces the same profile.
pub fn width_profile<E: IntervalEstimator>(
    sample: &Sample,
    sizes: &[usize],
    estimator: &E,
    seed: u64,
) -> Result<Vec<PrecisionPoint>> {
    if sizes.is_empty() {
        return Err(Error::InvalidParameter(
            "at least one subsample size is required".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if size > sample.len() {
            debug!(
                size,
                available = sample.len(),
                "subsample size exceeds available data, skipping"
            );
            continue;
        }
        let subsample = sample.subsample(size, seed)?;
        let interval = estimator.interval(&subsample)?;
        points.push(PrecisionPoint { size, interval });
    }
    Ok(points)
}
