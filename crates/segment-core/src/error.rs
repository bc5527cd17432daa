//! Error types for segment spending analysis
//!
//! Provides a unified error type for all segment-stats crates.

use thiserror::Error;

/// Core error type for segment spending analysis
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sample failed validation (empty, or containing non-finite values)
    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Lookup of a group name that is not in the collection
    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty sample
    pub fn empty_sample() -> Self {
        Self::InvalidSample("sample contains no observations".to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidSample(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a duplicate group name
    pub fn duplicate_group(name: &str) -> Self {
        Self::InvalidParameter(format!("group '{name}' is already present"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("subsample size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: subsample size must be positive"
        );

        let err = Error::InvalidSample("sample contains no observations".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid sample: sample contains no observations"
        );

        let err = Error::InsufficientData {
            expected: 10,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 observations, got 5"
        );

        let err = Error::Computation("failed to create normal distribution".to_string());
        assert_eq!(
            err.to_string(),
            "Computation error: failed to create normal distribution"
        );

        let err = Error::UnknownGroup("26-35".to_string());
        assert_eq!(err.to_string(), "Unknown group: 26-35");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_sample();
        assert_eq!(
            err.to_string(),
            "Invalid sample: sample contains no observations"
        );

        let err = Error::non_finite("purchase amounts");
        assert_eq!(
            err.to_string(),
            "Invalid sample: purchase amounts contains NaN or infinite values"
        );

        let err = Error::duplicate_group("Married");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: group 'Married' is already present"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::Computation("test failure".to_string()))
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }

    #[test]
    fn test_error_patterns() {
        // Pattern 1: check minimum sample size
        fn check_sample_size(data: &[f64], min_size: usize) -> Result<()> {
            if data.len() < min_size {
                return Err(Error::InsufficientData {
                    expected: min_size,
                    actual: data.len(),
                });
            }
            Ok(())
        }

        assert!(check_sample_size(&[1.0, 2.0], 5).is_err());
        assert!(check_sample_size(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).is_ok());

        // Pattern 2: check for finite values
        fn check_finite(data: &[f64]) -> Result<()> {
            if data.iter().any(|&x| !x.is_finite()) {
                return Err(Error::non_finite("data"));
            }
            Ok(())
        }

        assert!(check_finite(&[1.0, 2.0, 3.0]).is_ok());
        assert!(check_finite(&[1.0, f64::NAN, 3.0]).is_err());
        assert!(check_finite(&[1.0, f64::INFINITY, 3.0]).is_err());
    }
}
