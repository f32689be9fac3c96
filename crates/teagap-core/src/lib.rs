//! teagap-core - Female TEA gap analysis pipeline
//!
//! Turns three per-country indicator tables (Total Entrepreneurial Activity,
//! perceived capability, fear of failure) into one analysis-ready table and
//! regresses the female-male TEA gap on the female fear-of-failure and
//! perceived-capability rates.
//!
//! # Pipeline
//!
//! 1. `coerce` - locale-formatted text to optional numbers
//! 2. `filter` - drop aggregate/region/income rows
//! 3. `reshape` - raw rows to `CleanRecord`s with a fixed schema
//! 4. `merge` - inner join on (Country, Year), complete cases, sorted
//! 5. `regression` - OLS fit of the female gap
//! 6. `report` - delimited text output

pub mod coerce;
pub mod config;
pub mod error;
pub mod filter;
pub mod merge;
pub mod pipeline;
pub mod regression;
pub mod report;
pub mod reshape;

pub use config::{PipelineConfig, SourceConfig, SourcesConfig};
pub use error::{ConfigError, Result, TeagapError};
pub use filter::AggregateFilter;
pub use merge::{merge_tables, MergedRecord};
pub use regression::fit_female_gap;
pub use reshape::{reshape, CleanRecord, CleanTable, Indicator};

// Re-export the pieces of the lower crates that appear in this API
pub use teagap_io::{CsvReader, IoError, RawRecord, SourceColumns, TableSource};
pub use teagap_stats::{Coefficient, RegressionResult, StatsError};
