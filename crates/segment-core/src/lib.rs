//! Core types for statistical analysis of retail segment spending
//!
//! This crate provides the foundation shared by the `segment-stats`
//! workspace: a unified error type, a validated [`Sample`] of purchase
//! amounts, and small numeric helpers.
//!
//! # Example
//!
//! ```rust
//! use segment_core::Sample;
//!
//! let purchases = Sample::new(vec![9137.0, 9528.0, 8815.0, 9254.0])?;
//! assert_eq!(purchases.len(), 4);
//! assert!((purchases.mean() - 9183.5).abs() < 1e-9);
//! # Ok::<(), segment_core::Error>(())
//! ```

pub mod error;
pub mod sample;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use sample::Sample;
