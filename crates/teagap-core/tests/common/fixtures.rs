//! Test fixture loading utilities

use std::path::{Path, PathBuf};

use teagap_core::{PipelineConfig, SourcesConfig};

/// Directory holding the fixture CSVs
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

/// Default configuration pointed at the fixture CSVs
pub fn fixture_config() -> PipelineConfig {
    config_in(&fixture_dir())
}

/// Default configuration pointed at the default file names inside `dir`
pub fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        sources: SourcesConfig::default().relative_to(dir),
        ..PipelineConfig::default()
    }
}

/// Write a CSV with the default headers into `dir`
#[allow(dead_code)]
pub fn write_table(dir: &Path, name: &str, rows: &[(&str, &str, &str)]) {
    let mut text = String::from("Country,Women_Rate (%),Men_Rate (%)\n");
    for (country, female, male) in rows {
        text.push_str(&format!("{},{},{}\n", country, female, male));
    }
    std::fs::write(dir.join(name), text)
        .unwrap_or_else(|_| panic!("Failed to write fixture: {}", name));
}
