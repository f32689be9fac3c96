//! Table source trait and I/O errors

use crate::schema::{RawRecord, SourceColumns};
use thiserror::Error;

/// Errors that can occur while loading a source table
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format in {source_name}: {message}")]
    InvalidFormat {
        source_name: String,
        message: String,
    },

    #[error("Column '{column}' not found in {source_name}")]
    ColumnNotFound { column: String, source_name: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// A table that can yield raw country records
///
/// Implementations read the whole table; there is no streaming.
pub trait TableSource: Send + Sync {
    /// Read every data row, projected onto the given columns
    fn read_records(&self, columns: &SourceColumns) -> IoResult<Vec<RawRecord>>;

    /// Human-readable name used in log and error messages
    fn name(&self) -> &str;
}

/// Records already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    records: Vec<RawRecord>,
}

impl MemorySource {
    /// Wrap a list of records
    pub fn new(name: impl Into<String>, records: Vec<RawRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

impl TableSource for MemorySource {
    fn read_records(&self, _columns: &SourceColumns) -> IoResult<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
