//! Aggregate row filter
//!
//! Source tables mix country rows with sample averages, regional groupings
//! and income buckets. Those rows are removed by exact Country match before
//! the Country value is trimmed.

use std::collections::HashSet;

use teagap_io::RawRecord;

use crate::config::DEFAULT_AGGREGATE_LABELS;

/// Drops rows whose Country is an aggregate label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateFilter {
    labels: HashSet<String>,
}

impl Default for AggregateFilter {
    fn default() -> Self {
        Self::new(DEFAULT_AGGREGATE_LABELS)
    }
}

impl AggregateFilter {
    /// Build a filter from a list of labels
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive match on the untrimmed value
    pub fn is_aggregate(&self, country: &str) -> bool {
        self.labels.contains(country)
    }

    /// Keep non-aggregate rows, preserving their order
    pub fn retain_countries(&self, records: Vec<RawRecord>) -> Vec<RawRecord> {
        let before = records.len();
        let kept: Vec<RawRecord> = records
            .into_iter()
            .filter(|r| !self.is_aggregate(&r.country))
            .collect();
        tracing::debug!("Dropped {} aggregate rows", before - kept.len());
        kept
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the filter has no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
