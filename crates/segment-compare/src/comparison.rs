//! Two-group mean comparison via interval overlap

use crate::groups::Group;
use segment_confidence::{CltInterval, ConfidenceInterval, ConfidenceLevel, IntervalEstimator};
use segment_core::Result;
use std::fmt;
use tracing::debug;

/// Outcome of comparing two segment means at one confidence level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No conclusion: the intervals overlap, or neither sits strictly
    /// above the other
    Inconclusive,
    /// The first group's interval sits strictly above the second's
    FirstHigher,
    /// The second group's interval sits strictly above the first's
    SecondHigher,
}

impl Verdict {
    /// True when the comparison found evidence of a difference in means
    pub fn is_significant(&self) -> bool {
        !matches!(self, Self::Inconclusive)
    }

    /// Derive the verdict from two intervals.
    ///
    /// Direction requires one interval wholly and strictly above the
    /// other; non-overlapping intervals that merely touch stay
    /// inconclusive.
    fn from_intervals(first: &ConfidenceInterval, second: &ConfidenceInterval) -> Self {
        if first.overlaps(second) {
            return Self::Inconclusive;
        }
        if first.lower > second.upper {
            Self::FirstHigher
        } else if second.lower > first.upper {
            Self::SecondHigher
        } else {
            Self::Inconclusive
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Inconclusive => "no statistically significant difference",
            Self::FirstHigher => "first group spends significantly more on average",
            Self::SecondHigher => "second group spends significantly more on average",
        };
        write!(f, "{}", s)
    }
}

/// Full result of one two-group comparison
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Name of the first group
    pub first_name: String,
    /// Name of the second group
    pub second_name: String,
    /// Interval for the first group's mean
    pub first: ConfidenceInterval,
    /// Interval for the second group's mean
    pub second: ConfidenceInterval,
    /// Whether the intervals overlap (strict semantics)
    pub overlap: bool,
    /// The verdict derived from the intervals
    pub verdict: Verdict,
}

impl ComparisonReport {
    /// True when the comparison found evidence of a difference in means
    pub fn is_significant(&self) -> bool {
        self.verdict.is_significant()
    }

    /// Name of the group with the significantly higher mean, if any
    pub fn higher_group(&self) -> Option<&str> {
        match self.verdict {
            Verdict::FirstHigher => Some(&self.first_name),
            Verdict::SecondHigher => Some(&self.second_name),
            Verdict::Inconclusive => None,
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: {} ({}), {} ({}): {}",
            self.first_name,
            self.second_name,
            self.first_name,
            self.first,
            self.second_name,
            self.second,
            self.verdict
        )
    }
}

/// Compares mean spending between two groups through their confidence
/// intervals
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanComparison;

impl MeanComparison {
    /// Create a new comparison
    pub fn new() -> Self {
        Self
    }

    /// Compare two groups with the given interval estimator
    pub fn compare<E: IntervalEstimator>(
        &self,
        first: &Group,
        second: &Group,
        estimator: &E,
    ) -> Result<ComparisonReport> {
        let first_interval = estimator.interval(first.sample())?;
        let second_interval = estimator.interval(second.sample())?;

        let overlap = first_interval.overlaps(&second_interval);
        let verdict = Verdict::from_intervals(&first_interval, &second_interval);

        debug!(
            first = first.name(),
            second = second.name(),
            level = estimator.confidence_level().value(),
            overlap,
            "compared group means"
        );

        Ok(ComparisonReport {
            first_name: first.name().to_string(),
            second_name: second.name().to_string(),
            first: first_interval,
            second: second_interval,
            overlap,
            verdict,
        })
    }

    /// Compare two groups at several confidence levels, one report per
    /// level in the given order
    pub fn compare_at_levels(
        &self,
        first: &Group,
        second: &Group,
        levels: &[ConfidenceLevel],
    ) -> Result<Vec<ComparisonReport>> {
        levels
            .iter()
            .map(|&level| self.compare(first, second, &CltInterval::new(level)))
            .collect()
    }
}
