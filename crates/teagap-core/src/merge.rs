//! Merge of the three indicator tables
//!
//! Tables are inner-joined on (Country, Year). Keys are expected to be
//! unique per table; when a key repeats, every combination of matching rows
//! is produced (relational join semantics) and a warning is logged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::reshape::{CleanRecord, CleanTable};

/// A complete-case row of the analysis table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub country: String,
    pub year: i32,
    pub female_tea: f64,
    pub male_tea: f64,
    pub capability_female: f64,
    pub capability_male: f64,
    pub fear_female: f64,
    pub fear_male: f64,
}

impl MergedRecord {
    /// Female TEA minus male TEA
    pub fn female_gap(&self) -> f64 {
        self.female_tea - self.male_tea
    }

    /// Combine three rows, or `None` if any rate is missing
    fn complete(tea: &CleanRecord, capability: &CleanRecord, fear: &CleanRecord) -> Option<Self> {
        Some(Self {
            country: tea.country.clone(),
            year: tea.year,
            female_tea: tea.female?,
            male_tea: tea.male?,
            capability_female: capability.female?,
            capability_male: capability.male?,
            fear_female: fear.female?,
            fear_male: fear.male?,
        })
    }
}

type KeyIndex<'a> = HashMap<(&'a str, i32), Vec<&'a CleanRecord>>;

fn index_by_key(table: &CleanTable) -> KeyIndex<'_> {
    let mut index: KeyIndex<'_> = HashMap::new();
    for record in &table.records {
        index.entry(record.key()).or_default().push(record);
    }
    index
}

fn warn_duplicate_keys(table: &CleanTable, index: &KeyIndex<'_>) {
    for ((country, year), rows) in index {
        if rows.len() > 1 {
            tracing::warn!(
                "{} table has {} rows for ({}, {})",
                table.indicator,
                rows.len(),
                country,
                year
            );
        }
    }
}

/// Inner-join the three tables and keep complete cases
///
/// The result is sorted by Year, then Country.
pub fn merge_tables(
    tea: &CleanTable,
    capability: &CleanTable,
    fear: &CleanTable,
) -> Vec<MergedRecord> {
    let capability_index = index_by_key(capability);
    let fear_index = index_by_key(fear);

    // The left table is walked in order and needs no index of its own
    warn_duplicate_keys(tea, &index_by_key(tea));
    warn_duplicate_keys(capability, &capability_index);
    warn_duplicate_keys(fear, &fear_index);

    let mut joined = 0usize;
    let mut merged = Vec::new();

    for tea_row in &tea.records {
        let key = tea_row.key();
        let (Some(capability_rows), Some(fear_rows)) =
            (capability_index.get(&key), fear_index.get(&key))
        else {
            continue;
        };

        for capability_row in capability_rows {
            for fear_row in fear_rows {
                joined += 1;
                if let Some(record) = MergedRecord::complete(tea_row, capability_row, fear_row) {
                    merged.push(record);
                }
            }
        }
    }

    merged.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.country.cmp(&b.country)));

    tracing::debug!(
        "Joined {} rows, dropped {} incomplete",
        joined,
        joined - merged.len()
    );
    merged
}
