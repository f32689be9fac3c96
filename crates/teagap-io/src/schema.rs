//! Source column names and raw record representation

use serde::{Deserialize, Serialize};

/// Names of the columns read from a source table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceColumns {
    /// Country column
    pub country: String,

    /// Female rate column
    pub female: String,

    /// Male rate column
    pub male: String,
}

impl Default for SourceColumns {
    fn default() -> Self {
        Self {
            country: "Country".to_string(),
            female: "Women_Rate (%)".to_string(),
            male: "Men_Rate (%)".to_string(),
        }
    }
}

impl SourceColumns {
    /// Create a column mapping
    pub fn new(
        country: impl Into<String>,
        female: impl Into<String>,
        male: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            female: female.into(),
            male: male.into(),
        }
    }

    /// Column names in read order
    pub fn names(&self) -> [&str; 3] {
        [&self.country, &self.female, &self.male]
    }
}

/// One row of a source table, exactly as it appeared in the file
///
/// No invariants hold: the country may be an aggregate label and the rates
/// may be placeholders, footnoted values or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Country name (untrimmed)
    pub country: String,

    /// Female rate text
    pub female: String,

    /// Male rate text
    pub male: String,
}

impl RawRecord {
    /// Create a raw record
    pub fn new(
        country: impl Into<String>,
        female: impl Into<String>,
        male: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            female: female.into(),
            male: male.into(),
        }
    }
}
