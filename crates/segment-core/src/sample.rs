//! Validated samples of purchase amounts

use crate::error::{Error, Result};
use crate::utils;
use rand::prelude::*;

/// An immutable sample of per-transaction purchase amounts.
///
/// Construction validates the observations once: the sample must be
/// non-empty and every value must be finite. All downstream statistics can
/// then assume well-formed data instead of propagating NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Create a sample from raw observations.
    ///
    /// Fails with [`Error::InvalidSample`] if `values` is empty or contains
    /// NaN or infinite entries.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_sample());
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample"));
        }
        Ok(Self { values })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for slice-like API symmetry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The observations, in their original order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Arithmetic mean of the observations
    pub fn mean(&self) -> f64 {
        utils::mean(&self.values)
    }

    /// Sample standard deviation (n-1 denominator); 0.0 when n < 2
    pub fn std_dev(&self) -> f64 {
        utils::std_dev(&self.values)
    }

    /// Standard error of the mean: std_dev / sqrt(n)
    pub fn standard_error(&self) -> f64 {
        self.std_dev() / (self.len() as f64).sqrt()
    }

    /// Draw a seeded subsample of `size` observations without replacement.
    ///
    /// The same seed always yields the same subsample, so width
    /// demonstrations and tests are reproducible.
    pub fn subsample(&self, size: usize, seed: u64) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidParameter(
                "subsample size must be positive".to_string(),
            ));
        }
        if size > self.values.len() {
            return Err(Error::InsufficientData {
                expected: size,
                actual: self.values.len(),
            });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let indices = rand::seq::index::sample(&mut rng, self.values.len(), size);
        let values = indices.iter().map(|i| self.values[i]).collect();
        Ok(Self { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_validation() {
        assert!(Sample::new(vec![]).is_err());
        assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
        assert!(Sample::new(vec![1.0, f64::INFINITY]).is_err());
        assert!(Sample::new(vec![1.0, f64::NEG_INFINITY]).is_err());
        assert!(Sample::new(vec![9137.0]).is_ok());
    }

    #[test]
    fn test_statistics() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(sample.len(), 5);
        assert_abs_diff_eq!(sample.mean(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sample.std_dev(), 1.5811388300841898, epsilon = 1e-12);
        assert_abs_diff_eq!(sample.standard_error(), 0.7071067811865476, epsilon = 1e-12);
    }

    #[test]
    fn test_single_observation_has_zero_spread() {
        let sample = Sample::new(vec![9500.0]).unwrap();
        assert_eq!(sample.std_dev(), 0.0);
        assert_eq!(sample.standard_error(), 0.0);
    }

    #[test]
    fn test_subsample_is_seeded() {
        let sample = Sample::new((0..100).map(f64::from).collect()).unwrap();

        let a = sample.subsample(10, 42).unwrap();
        let b = sample.subsample(10, 42).unwrap();
        let c = sample.subsample(10, 43).unwrap();

        assert_eq!(a.len(), 10);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_subsample_draws_from_the_sample() {
        let sample = Sample::new(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
        let sub = sample.subsample(3, 7).unwrap();
        for v in sub.values() {
            assert!(sample.values().contains(v));
        }
    }

    #[test]
    fn test_subsample_size_bounds() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(sample.subsample(0, 1).is_err());
        assert!(sample.subsample(4, 1).is_err());
        assert!(sample.subsample(3, 1).is_ok());
    }
}
