//! End-to-end pipeline: load, clean, merge, fit, report

use std::io::Write;

use teagap_io::{CsvReader, SourceColumns, TableSource};
use teagap_stats::RegressionResult;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::filter::AggregateFilter;
use crate::merge::{merge_tables, MergedRecord};
use crate::regression::fit_female_gap;
use crate::report::{write_regression, write_tables};
use crate::reshape::{reshape, CleanTable, Indicator};

/// Read and clean one indicator table
pub fn load_table(
    source: &dyn TableSource,
    columns: &SourceColumns,
    indicator: Indicator,
    filter: &AggregateFilter,
    year: i32,
) -> Result<CleanTable> {
    let raw = source.read_records(columns)?;
    tracing::debug!("Loaded {} rows of {} from {}", raw.len(), indicator, source.name());
    Ok(reshape(raw, indicator, filter, year))
}

/// Clean and merge three already opened sources
pub fn clean_and_merge(
    config: &PipelineConfig,
    tea: &dyn TableSource,
    capability: &dyn TableSource,
    fear: &dyn TableSource,
) -> Result<Vec<MergedRecord>> {
    let filter = AggregateFilter::new(config.aggregate_labels.iter().cloned());
    let sources = &config.sources;
    let load = |source: &dyn TableSource, columns: &SourceColumns, indicator: Indicator| {
        load_table(source, columns, indicator, &filter, config.year)
    };

    #[cfg(feature = "parallel")]
    let (tea, (capability, fear)) = rayon::join(
        || load(tea, &sources.tea.columns, Indicator::Tea),
        || {
            rayon::join(
                || load(capability, &sources.capability.columns, Indicator::PerceivedCapability),
                || load(fear, &sources.fear.columns, Indicator::FearOfFailure),
            )
        },
    );

    #[cfg(not(feature = "parallel"))]
    let (tea, (capability, fear)) = (
        load(tea, &sources.tea.columns, Indicator::Tea),
        (
            load(capability, &sources.capability.columns, Indicator::PerceivedCapability),
            load(fear, &sources.fear.columns, Indicator::FearOfFailure),
        ),
    );

    let merged = merge_tables(&tea?, &capability?, &fear?);
    tracing::info!("Merged table has {} complete rows", merged.len());
    Ok(merged)
}

/// Load the three configured CSV files and produce the analysis table
pub fn load_and_clean(config: &PipelineConfig) -> Result<Vec<MergedRecord>> {
    config.validate()?;

    let tea = CsvReader::open(&config.sources.tea.path)?;
    let capability = CsvReader::open(&config.sources.capability.path)?;
    let fear = CsvReader::open(&config.sources.fear.path)?;

    clean_and_merge(config, &tea, &capability, &fear)
}

/// Write the table sections, then fit and write the regression
///
/// Table output is flushed before fitting, so it stands even when the fit
/// fails.
pub fn report<W: Write>(
    config: &PipelineConfig,
    records: &[MergedRecord],
    mut writer: W,
) -> Result<RegressionResult> {
    write_tables(&mut writer, records, config.preview_rows)?;
    writer.flush()?;

    let result = fit_female_gap(records)?;
    write_regression(&mut writer, &result)?;
    writer.flush()?;
    Ok(result)
}

/// Run the whole pipeline against the configured files
pub fn run<W: Write>(config: &PipelineConfig, writer: W) -> Result<RegressionResult> {
    let records = load_and_clean(config)?;
    report(config, &records, writer)
}
