//! Configuration for teagap-core
//!
//! Everything the pipeline treats as a constant (the observation year, the
//! aggregate labels to drop, where the three tables live) is carried here
//! and passed down explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use teagap_io::SourceColumns;

use crate::error::ConfigError;

/// Observation year attached to every ingested row
pub const DEFAULT_YEAR: i32 = 2023;

/// Rows shown in the report preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Country labels that denote aggregates rather than countries
pub const DEFAULT_AGGREGATE_LABELS: [&str; 9] = [
    "Sample Average",
    "Central and East Asia",
    "Europe & UK",
    "Latin America and Caribbean",
    "Middle East and Africa",
    "North America",
    "High Income",
    "Middle Income",
    "Low Income",
];

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Year assigned to every row of every table
    pub year: i32,
    /// Exact Country values dropped before cleaning
    pub aggregate_labels: Vec<String>,
    /// Number of merged rows in the report preview
    pub preview_rows: usize,
    /// Input tables
    pub sources: SourcesConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            aggregate_labels: DEFAULT_AGGREGATE_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            sources: SourcesConfig::default(),
        }
    }
}

/// The three input tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Total Entrepreneurial Activity by gender
    pub tea: SourceConfig,
    /// Perceived capabilities by gender
    pub capability: SourceConfig,
    /// Fear of failure by gender
    pub fear: SourceConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            tea: SourceConfig::new("TEA_by_gender.csv"),
            capability: SourceConfig::new("Perceived_capabilities_by_gender.csv"),
            fear: SourceConfig::new("Fear_of_failure_by_gender.csv"),
        }
    }
}

impl SourcesConfig {
    /// Point all three sources at files inside `dir`, keeping their file names
    pub fn relative_to(&self, dir: &Path) -> Self {
        let rebase = |source: &SourceConfig| SourceConfig {
            path: dir.join(&source.path),
            columns: source.columns.clone(),
        };
        Self {
            tea: rebase(&self.tea),
            capability: rebase(&self.capability),
            fear: rebase(&self.fear),
        }
    }
}

/// A single input table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File location
    pub path: PathBuf,
    /// Column names inside the file
    #[serde(default)]
    pub columns: SourceColumns,
}

impl SourceConfig {
    /// A source with the default column names
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            columns: SourceColumns::default(),
        }
    }

    fn validate(&self, label: &str) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::Missing(format!("sources.{}.path", label)));
        }

        for (field, name) in ["country", "female", "male"]
            .iter()
            .zip(self.columns.names())
        {
            if name.is_empty() {
                return Err(ConfigError::Missing(format!(
                    "sources.{}.columns.{}",
                    label, field
                )));
            }
        }

        if self.columns.female == self.columns.male {
            return Err(ConfigError::Conflict(format!(
                "sources.{}: female and male columns are both '{}'",
                label, self.columns.female
            )));
        }

        Ok(())
    }
}

impl PipelineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a TOML file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sources.tea.validate("tea")?;
        self.sources.capability.validate("capability")?;
        self.sources.fear.validate("fear")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.year, 2023);
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.aggregate_labels.len(), 9);
        assert!(config.aggregate_labels.contains(&"Europe & UK".to_string()));
        assert_eq!(config.sources.tea.path, PathBuf::from("TEA_by_gender.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PipelineConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PipelineConfig::default();
        let json = config.to_json().unwrap();
        let parsed = PipelineConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PipelineConfig::from_toml(
            r#"
year = 2022

[sources.fear]
path = "fear.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.year, 2022);
        assert_eq!(config.sources.fear.path, PathBuf::from("fear.csv"));
        assert_eq!(config.sources.fear.columns, SourceColumns::default());
        assert_eq!(
            config.sources.tea.path,
            PathBuf::from("TEA_by_gender.csv")
        );
        assert_eq!(config.aggregate_labels.len(), 9);
    }

    #[test]
    fn test_validate_rejects_same_columns() {
        let mut config = PipelineConfig::default();
        config.sources.capability.columns.male = "Women_Rate (%)".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Conflict(_)));
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let mut config = PipelineConfig::default();
        config.sources.tea.path = PathBuf::new();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ref field) if field == "sources.tea.path"));
    }

    #[test]
    fn test_relative_to() {
        let sources = SourcesConfig::default().relative_to(Path::new("/data"));
        assert_eq!(sources.fear.path, PathBuf::from("/data/Fear_of_failure_by_gender.csv"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::load_or_default(&dir.path().join("teagap.toml")).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }
}
