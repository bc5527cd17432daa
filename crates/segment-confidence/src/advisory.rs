//! Structured advisory events raised during interval estimation
//!
//! Advisories are non-fatal: estimation always proceeds and the returned
//! interval is unaffected. Each advisory is surfaced as a `tracing` warn
//! event rather than being folded into the return value, so subscribers
//! (console, log collectors) observe them without the caller having to
//! thread diagnostics through its own types.

use std::fmt;
use tracing::warn;

/// A non-fatal diagnostic raised while estimating a confidence interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Sample is below the usual comfort size for the normal approximation
    SmallSample { n: usize },
    /// Standard error is zero; the interval collapses to its point estimate
    DegenerateSpread,
}

impl Advisory {
    /// Emit this advisory as a `tracing` event
    pub fn emit(&self) {
        match *self {
            Self::SmallSample { n } => {
                warn!(n, "sample is small for the CLT normal approximation");
            }
            Self::DegenerateSpread => {
                warn!("standard error is zero, returning a zero-width interval");
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SmallSample { n } => {
                write!(f, "sample size ({n}) is small for the CLT normal approximation")
            }
            Self::DegenerateSpread => {
                write!(f, "standard error is zero; interval collapses to the point estimate")
            }
        }
    }
}
