//! Named customer segments and their samples

use crate::comparison::{ComparisonReport, MeanComparison};
use segment_confidence::{ConfidenceInterval, IntervalEstimator};
use segment_core::{Error, Result, Sample};

/// One named customer segment and its purchase sample
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    sample: Sample,
}

impl Group {
    /// Create a new group
    pub fn new(name: impl Into<String>, sample: Sample) -> Self {
        Self {
            name: name.into(),
            sample,
        }
    }

    /// The segment name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The purchase sample for this segment
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Mean purchase amount for this segment
    pub fn mean(&self) -> f64 {
        self.sample.mean()
    }

    /// Number of transactions in this segment
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    /// Always false; samples are validated non-empty
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }
}

/// An insertion-ordered partition of the dataset into named groups.
///
/// Each group maps a segment value (a gender, a marital-status flag, an
/// age bracket) to the sample of purchase amounts observed for it.
#[derive(Debug, Clone, Default)]
pub struct GroupedSamples {
    groups: Vec<Group>,
}

impl GroupedSamples {
    /// Create an empty partition
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named group.
    ///
    /// Fails if a group with the same name is already present.
    pub fn insert(&mut self, name: impl Into<String>, sample: Sample) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(Error::duplicate_group(&name));
        }
        self.groups.push(Group::new(name, sample));
        Ok(())
    }

    /// Look up a group by name
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no groups have been added
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over groups in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Mean purchase amount per group, in insertion order
    pub fn mean_by_group(&self) -> Vec<(&str, f64)> {
        self.groups.iter().map(|g| (g.name(), g.mean())).collect()
    }

    /// One confidence interval per group, in insertion order
    pub fn intervals<E: IntervalEstimator>(
        &self,
        estimator: &E,
    ) -> Result<Vec<(&str, ConfidenceInterval)>> {
        self.groups
            .iter()
            .map(|g| Ok((g.name(), estimator.interval(g.sample())?)))
            .collect()
    }

    /// Compare two groups by name.
    ///
    /// Fails with [`Error::UnknownGroup`] if either name is missing.
    pub fn compare<E: IntervalEstimator>(
        &self,
        first: &str,
        second: &str,
        estimator: &E,
    ) -> Result<ComparisonReport> {
        let a = self
            .get(first)
            .ok_or_else(|| Error::UnknownGroup(first.to_string()))?;
        let b = self
            .get(second)
            .ok_or_else(|| Error::UnknownGroup(second.to_string()))?;
        MeanComparison::new().compare(a, b, estimator)
    }
}
