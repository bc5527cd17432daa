//! Confidence interval estimation for mean segment spending
//!
//! This crate provides the normal-approximation (CLT) confidence interval
//! for a segment's mean purchase amount, the interval/level types shared by
//! the workspace, and a width-versus-sample-size profile.
//!
//! # Overview
//!
//! A confidence interval gives a range expected to contain the true
//! population mean with the stated probability under repeated sampling.
//! Two non-overlapping intervals at level c are evidence that the
//! population means of two segments differ; overlapping intervals support
//! no conclusion. Overlap uses strict inequalities, so intervals that only
//! touch at an endpoint do not overlap.
//!
//! # Example
//!
//! ```rust
//! use segment_confidence::{clt_interval, IntervalEstimator};
//! use segment_core::Sample;
//!
//! let purchases = Sample::new(vec![
//!     9137.0, 9528.0, 8815.0, 9254.0, 9421.0, 8973.0, 9610.0, 9088.0,
//! ])?;
//!
//! let ci = clt_interval(0.95).interval(&purchases)?;
//! assert!(ci.contains(purchases.mean()));
//! assert!(ci.lower < ci.upper);
//! # Ok::<(), segment_core::Error>(())
//! ```

mod advisory;
mod clt;
mod precision;
mod traits;
mod types;

// Re-exports
pub use advisory::Advisory;
pub use clt::{CltInterval, CLT_COMFORT_SIZE};
pub use precision::{width_profile, PrecisionPoint};
pub use traits::IntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel};

/// Convenience constructor
pub fn clt_interval(confidence_level: f64) -> CltInterval {
    CltInterval::new(ConfidenceLevel::new(confidence_level))
}
