//! teagap binary
//!
//! Reads the three indicator CSVs from the working directory, prints the
//! merged table and the female TEA gap regression to stdout.

use std::path::Path;
use std::process::ExitCode;

use teagap_core::{pipeline, PipelineConfig};
use tracing_subscriber::EnvFilter;

/// Optional configuration file in the working directory
const CONFIG_FILE: &str = "teagap.toml";

fn main() -> ExitCode {
    // Initialize logging on stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let result = PipelineConfig::load_or_default(Path::new(CONFIG_FILE))
        .and_then(|config| pipeline::run(&config, std::io::stdout().lock()));

    match result {
        Ok(fit) => {
            tracing::debug!("Finished with n = {}, k = {}", fit.n, fit.k);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
