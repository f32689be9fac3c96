//! CSV table reader

use crate::reader::{IoError, IoResult, TableSource};
use crate::schema::{RawRecord, SourceColumns};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum CsvInput {
    File(PathBuf),
    Text(String),
}

/// CSV table reader
#[derive(Debug, Clone)]
pub struct CsvReader {
    name: String,
    input: CsvInput,
    headers: Vec<String>,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma-delimited CSV file with a header row
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        Self::open_with_options(path, b',')
    }

    /// Open a CSV file with a custom delimiter
    pub fn open_with_options(path: impl AsRef<Path>, delimiter: u8) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let mut reader = Self {
            name: path.display().to_string(),
            input: CsvInput::File(path.to_path_buf()),
            headers: Vec::new(),
            delimiter,
        };
        reader.headers = reader.read_headers()?;
        Ok(reader)
    }

    /// Build a reader over CSV text held in memory
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> IoResult<Self> {
        let mut reader = Self {
            name: name.into(),
            input: CsvInput::Text(text.into()),
            headers: Vec::new(),
            delimiter: b',',
        };
        reader.headers = reader.read_headers()?;
        Ok(reader)
    }

    /// Header names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn csv_reader(&self) -> IoResult<csv::Reader<Box<dyn Read + '_>>> {
        let source: Box<dyn Read + '_> = match &self.input {
            CsvInput::File(path) => {
                let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
                Box::new(BufReader::new(file))
            }
            CsvInput::Text(text) => Box::new(text.as_bytes()),
        };

        Ok(csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(source))
    }

    fn read_headers(&self) -> IoResult<Vec<String>> {
        let mut reader = self.csv_reader()?;
        let headers = reader.headers().map_err(|e| self.invalid_format(e))?;
        Ok(headers.iter().map(|s| s.to_string()).collect())
    }

    fn invalid_format(&self, err: csv::Error) -> IoError {
        IoError::InvalidFormat {
            source_name: self.name.clone(),
            message: err.to_string(),
        }
    }

    fn require_column(&self, column: &str) -> IoResult<usize> {
        self.column_index(column)
            .ok_or_else(|| IoError::ColumnNotFound {
                column: column.to_string(),
                source_name: self.name.clone(),
            })
    }
}

impl TableSource for CsvReader {
    fn read_records(&self, columns: &SourceColumns) -> IoResult<Vec<RawRecord>> {
        let country_idx = self.require_column(&columns.country)?;
        let female_idx = self.require_column(&columns.female)?;
        let male_idx = self.require_column(&columns.male)?;

        let mut reader = self.csv_reader()?;
        let mut records = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| self.invalid_format(e))?;
            // Short rows read the missing cells as empty text
            let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
            records.push(RawRecord {
                country: cell(country_idx),
                female: cell(female_idx),
                male: cell(male_idx),
            });
        }

        tracing::debug!("Read {} rows from {}", records.len(), self.name);
        Ok(records)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
