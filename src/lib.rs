//! Statistical comparison of mean spending across retail customer segments
//!
//! `segment-stats` takes named samples of per-transaction purchase amounts
//! (one per customer segment: a gender, a marital-status flag, an age
//! bracket) and answers whether the segments' population mean spends
//! differ: it builds CLT confidence intervals per segment and checks them
//! for overlap.
//!
//! The crate is a facade over the workspace members:
//!
//! - [`segment_core`] — validated [`Sample`]s, errors, numeric helpers
//! - [`segment_confidence`] — [`ConfidenceInterval`], the [`CltInterval`]
//!   estimator, advisories, and the width-versus-n profile
//! - [`segment_compare`] — [`GroupedSamples`] partitions and
//!   [`MeanComparison`] verdicts
//!
//! # Example
//!
//! ```rust
//! use segment_stats::{clt_interval, GroupedSamples, Sample};
//!
//! let mut by_marital_status = GroupedSamples::new();
//! by_marital_status.insert("Single", Sample::new(vec![9100.0, 9300.0, 9250.0, 9180.0])?)?;
//! by_marital_status.insert("Married", Sample::new(vec![9050.0, 9220.0, 9310.0, 9140.0])?)?;
//!
//! let report = by_marital_status.compare("Single", "Married", &clt_interval(0.95))?;
//! if !report.is_significant() {
//!     // Overlapping intervals: no evidence the population means differ.
//!     assert!(report.overlap);
//! }
//! # Ok::<(), segment_stats::Error>(())
//! ```

pub use segment_compare::{ComparisonReport, Group, GroupedSamples, MeanComparison, Verdict};
pub use segment_confidence::{
    clt_interval, width_profile, Advisory, CltInterval, ConfidenceInterval, ConfidenceLevel,
    IntervalEstimator, PrecisionPoint, CLT_COMFORT_SIZE,
};
pub use segment_core::{Error, Result, Sample};
