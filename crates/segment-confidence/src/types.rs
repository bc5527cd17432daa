//! Common types for confidence intervals

use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// True when the interval has collapsed to its point estimate
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Check if intervals overlap.
    ///
    /// Strict inequalities: intervals that only touch at an endpoint are
    /// treated as non-overlapping. Non-overlap at level c is evidence that
    /// the underlying population means differ; overlap supports no
    /// conclusion either way.
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.2}, {:.2}], estimate: {:.2}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Panics
    /// Panics if level is not in (0, 1)
    pub fn new(level: f64) -> Self {
        assert!(
            level > 0.0 && level < 1.0,
            "Confidence level must be in (0, 1)"
        );
        Self(level)
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl From<f64> for ConfidenceLevel {
    fn from(level: f64) -> Self {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(2.0, 8.0, 5.0, 0.95);

        assert_eq!(ci.width(), 6.0);
        assert_eq!(ci.margin_of_error(), 3.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
        assert!(!ci.is_degenerate());
    }

    #[test]
    fn test_overlap() {
        let ci1 = ConfidenceInterval::new(2.0, 6.0, 4.0, 0.95);
        let ci2 = ConfidenceInterval::new(4.0, 8.0, 6.0, 0.95);
        let ci3 = ConfidenceInterval::new(7.0, 9.0, 8.0, 0.95);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
        assert!(!ci3.overlaps(&ci1));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let ci1 = ConfidenceInterval::new(0.0, 5.0, 2.5, 0.95);
        let ci2 = ConfidenceInterval::new(5.0, 9.0, 7.0, 0.95);

        assert!(!ci1.overlaps(&ci2));
        assert!(!ci2.overlaps(&ci1));
    }

    #[test]
    fn test_identical_degenerate_intervals_do_not_overlap() {
        let ci1 = ConfidenceInterval::new(10.0, 10.0, 10.0, 0.95);
        let ci2 = ConfidenceInterval::new(10.0, 10.0, 10.0, 0.95);

        assert!(ci1.is_degenerate());
        assert!(!ci1.overlaps(&ci2));
        assert!(!ci2.overlaps(&ci1));
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95);
        assert_eq!(level.value(), 0.95);
        assert!((level.alpha() - 0.05).abs() < 1e-10);
        assert!((level.tail_probability() - 0.025).abs() < 1e-10);
    }

    #[test]
    #[should_panic]
    fn test_invalid_confidence_level() {
        ConfidenceLevel::new(1.5);
    }

    #[test]
    fn test_confidence_interval_display() {
        let ci = ConfidenceInterval::new(9022.25, 9241.75, 9132.0, 0.95);
        let display = format!("{}", ci);
        assert!(display.contains("95.0%"));
        assert!(display.contains("9022.25"));
        assert!(display.contains("9241.75"));
        assert!(display.contains("9132.00"));
    }

    #[test]
    fn test_confidence_level_display() {
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_FIVE), "95.0%");
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_NINE), "99.0%");
    }
}
