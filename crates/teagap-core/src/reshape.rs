//! Table reshaping into the canonical (Country, Year, female, male) schema

use serde::{Deserialize, Serialize};
use teagap_io::RawRecord;

use crate::coerce::coerce_numeric;
use crate::filter::AggregateFilter;

/// The indicator a table measures, which fixes its output column names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Total Entrepreneurial Activity
    Tea,
    /// Perceived capabilities
    PerceivedCapability,
    /// Fear of failure
    FearOfFailure,
}

impl Indicator {
    /// Output name of the female value column
    pub fn female_label(&self) -> &'static str {
        match self {
            Indicator::Tea => "Female TEA",
            Indicator::PerceivedCapability => "PerceivedCapability_Female",
            Indicator::FearOfFailure => "FearOfFailure_Female",
        }
    }

    /// Output name of the male value column
    pub fn male_label(&self) -> &'static str {
        match self {
            Indicator::Tea => "Male TEA",
            Indicator::PerceivedCapability => "PerceivedCapability_Male",
            Indicator::FearOfFailure => "FearOfFailure_Male",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Indicator::Tea => "TEA",
            Indicator::PerceivedCapability => "perceived capability",
            Indicator::FearOfFailure => "fear of failure",
        };
        f.write_str(name)
    }
}

/// A cleaned country observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Trimmed, non-empty country name
    pub country: String,
    /// Observation year
    pub year: i32,
    /// Female rate, `None` when the source text held no number
    pub female: Option<f64>,
    /// Male rate, `None` when the source text held no number
    pub male: Option<f64>,
}

impl CleanRecord {
    /// Join key
    pub fn key(&self) -> (&str, i32) {
        (&self.country, self.year)
    }
}

/// Cleaned rows of one indicator table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanTable {
    /// What the values measure
    pub indicator: Indicator,
    /// Rows in source order
    pub records: Vec<CleanRecord>,
}

impl CleanTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Clean one raw table
///
/// Aggregate rows are dropped on the untrimmed Country, both rates are
/// coerced, Country is trimmed and `year` is attached. Rows whose Country is
/// blank after trimming are discarded.
pub fn reshape(
    raw: Vec<RawRecord>,
    indicator: Indicator,
    filter: &AggregateFilter,
    year: i32,
) -> CleanTable {
    let rows = filter.retain_countries(raw);

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let female = coerce_numeric(&row.female);
        let male = coerce_numeric(&row.male);
        let country = row.country.trim();
        if country.is_empty() {
            tracing::debug!("Skipping {} row with blank country", indicator);
            continue;
        }
        records.push(CleanRecord {
            country: country.to_string(),
            year,
            female,
            male,
        });
    }

    tracing::debug!("Reshaped {} table: {} rows", indicator, records.len());
    CleanTable { indicator, records }
}
