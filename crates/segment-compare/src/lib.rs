//! Group partitions and mean-spending comparison
//!
//! This crate answers the "does segment X spend more per transaction than
//! segment Y?" question: it holds named groups of purchase samples and
//! compares their mean-spending confidence intervals for overlap.
//!
//! # Example
//!
//! ```rust
//! use segment_compare::GroupedSamples;
//! use segment_confidence::clt_interval;
//! use segment_core::Sample;
//!
//! let mut by_gender = GroupedSamples::new();
//! by_gender.insert("M", Sample::new(vec![9500.0, 9300.0, 9700.0, 9400.0])?)?;
//! by_gender.insert("F", Sample::new(vec![8700.0, 8900.0, 8600.0, 8800.0])?)?;
//!
//! let report = by_gender.compare("M", "F", &clt_interval(0.95))?;
//! println!("{}", report);
//! # Ok::<(), segment_core::Error>(())
//! ```

mod comparison;
mod groups;

// Re-exports
pub use comparison::{ComparisonReport, MeanComparison, Verdict};
pub use groups::{Group, GroupedSamples};
