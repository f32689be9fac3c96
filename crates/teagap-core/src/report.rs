//! Plain-text report output
//!
//! Writes the merged table as CSV, the regression as a `Variable,Coef,StdErr`
//! block, and a one-paragraph reading of the coefficient signs.

use std::fmt;
use std::io::Write;

use teagap_stats::RegressionResult;

use crate::error::Result;
use crate::merge::MergedRecord;
use crate::regression::{CAPABILITY_TERM, FEAR_TERM};

/// Header of the merged table
pub const MERGED_HEADER: [&str; 9] = [
    "Country",
    "Year",
    "Female TEA",
    "Male TEA",
    "PerceivedCapability_Female",
    "PerceivedCapability_Male",
    "FearOfFailure_Female",
    "FearOfFailure_Male",
    "FemaleGap",
];

/// Which way a predictor moves the female gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increases,
    Decreases,
}

impl Direction {
    /// Negative coefficients decrease the gap; zero and positive ones increase it
    pub fn from_coefficient(estimate: f64) -> Self {
        if estimate < 0.0 {
            Direction::Decreases
        } else {
            Direction::Increases
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increases => "increases",
            Direction::Decreases => "decreases",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shortest text that reads back as the same float, always with a fraction
/// or exponent (`5.0`, `12.3`, `-3.0000000000000004`)
fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Fixed-point text; an undefined value prints as `nan`
fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Write merged rows as CSV, optionally only the first `limit`
pub fn write_merged_csv<W: Write>(
    writer: W,
    records: &[MergedRecord],
    limit: Option<usize>,
) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(MERGED_HEADER)?;

    let count = limit.unwrap_or(records.len()).min(records.len());
    for record in &records[..count] {
        csv_writer.write_record([
            record.country.clone(),
            record.year.to_string(),
            format_float(record.female_tea),
            format_float(record.male_tea),
            format_float(record.capability_female),
            format_float(record.capability_male),
            format_float(record.fear_female),
            format_float(record.fear_male),
            format_float(record.female_gap()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the coefficient table and R²
pub fn write_regression_summary<W: Write>(mut writer: W, result: &RegressionResult) -> Result<()> {
    writeln!(writer, "Variable,Coef,StdErr")?;
    for term in &result.terms {
        writeln!(
            writer,
            "{},{},{}",
            term.name,
            format_fixed(term.estimate, 6),
            format_fixed(term.std_error, 6)
        )?;
    }
    writeln!(writer, "R-squared: {}", format_fixed(result.r_squared, 4))?;
    Ok(())
}

/// Describe the direction of each predictor's effect
///
/// A term missing from the result reads as a zero coefficient.
pub fn interpretation(result: &RegressionResult) -> String {
    let direction = |name: &str| {
        Direction::from_coefficient(result.coefficient(name).map_or(0.0, |c| c.estimate))
    };

    format!(
        "Holding the other factor constant, a higher female fear of failure {} the female TEA gap. \
         Higher female perceived capabilities {} the female TEA gap. \
         See coefficients and R-squared above for magnitude and fit.",
        direction(FEAR_TERM),
        direction(CAPABILITY_TERM)
    )
}

/// Write the preview and the full merged table
pub fn write_tables<W: Write>(
    mut writer: W,
    records: &[MergedRecord],
    preview_rows: usize,
) -> Result<()> {
    writeln!(writer, "CSV Preview (first {} rows):", preview_rows)?;
    write_merged_csv(&mut writer, records, Some(preview_rows))?;
    writeln!(writer)?;

    writeln!(writer, "Full CSV:")?;
    write_merged_csv(&mut writer, records, None)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the regression block and its interpretation
pub fn write_regression<W: Write>(mut writer: W, result: &RegressionResult) -> Result<()> {
    writeln!(writer, "Regression Summary:")?;
    write_regression_summary(&mut writer, result)?;
    writeln!(writer, "Interpretation:")?;
    writeln!(writer, "{}", interpretation(result))?;
    Ok(())
}
