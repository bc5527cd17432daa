//! CLT-based confidence intervals for the sample mean

use crate::advisory::Advisory;
use crate::traits::IntervalEstimator;
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use segment_core::{Error, Result, Sample};
use statrs::distribution::{ContinuousCDF, Normal};

/// Samples below this size get a small-sample advisory (the usual n >= 30
/// rule of thumb for the normal approximation)
pub const CLT_COMFORT_SIZE: usize = 30;

/// Normal-approximation confidence interval estimator for the mean.
///
/// By the Central Limit Theorem the sampling distribution of the mean is
/// approximately normal for large n, so the two-sided interval is
/// `mean ± z * (s / sqrt(n))` with `s` the unbiased sample standard
/// deviation and `z` the standard-normal critical value for the configured
/// level.
///
/// A sample with zero standard error (a single observation, or constant
/// values) yields the zero-width interval `(mean, mean)` together with a
/// [`Advisory::DegenerateSpread`] event; this is deliberately not an error.
#[derive(Debug, Clone, Copy)]
pub struct CltInterval {
    confidence_level: ConfidenceLevel,
}

impl CltInterval {
    /// Create a new CLT interval estimator
    pub fn new(confidence_level: ConfidenceLevel) -> Self {
        Self { confidence_level }
    }

    /// Diagnostics that estimating over `sample` raises.
    ///
    /// The same advisories are emitted as `tracing` events by
    /// [`IntervalEstimator::interval`]; this accessor exists so they can be
    /// inspected directly.
    pub fn advisories(&self, sample: &Sample) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if sample.len() < CLT_COMFORT_SIZE {
            advisories.push(Advisory::SmallSample { n: sample.len() });
        }
        if sample.standard_error() == 0.0 {
            advisories.push(Advisory::DegenerateSpread);
        }
        advisories
    }

    /// Two-sided standard-normal critical value for the configured level
    fn critical_value(&self) -> Result<f64> {
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))?;
        Ok(normal.inverse_cdf(1.0 - self.confidence_level.tail_probability()))
    }
}

impl IntervalEstimator for CltInterval {
    fn interval(&self, sample: &Sample) -> Result<ConfidenceInterval> {
        for advisory in self.advisories(sample) {
            advisory.emit();
        }

        let mean = sample.mean();
        let std_error = sample.standard_error();

        if std_error == 0.0 {
            return Ok(ConfidenceInterval::new(
                mean,
                mean,
                mean,
                self.confidence_level.value(),
            ));
        }

        let margin = self.critical_value()? * std_error;
        Ok(ConfidenceInterval::new(
            mean - margin,
            mean + margin,
            mean,
            self.confidence_level.value(),
        ))
    }

    fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }
}
