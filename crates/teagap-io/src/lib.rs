//! teagap-io - Raw table ingestion for country indicator datasets
//!
//! Each source file is a delimited table with a Country column and two
//! gender-disaggregated rate columns. Values are kept as raw text here;
//! numeric coercion and cleaning happen downstream in `teagap-core`.
//!
//! # Design
//!
//! Readers implement the `TableSource` trait so the pipeline can consume
//! files and in-memory tables uniformly. Tables are read fully into memory.

pub mod csv_reader;
pub mod reader;
pub mod schema;

pub use csv_reader::*;
pub use reader::*;
pub use schema::*;
