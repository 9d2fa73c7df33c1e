//! release-upload
//!
//! Uploads release information for a build to the Releases API, retrying
//! failed uploads a bounded number of times.
//!
//! ```text
//!   release-upload.toml ──▶ config ──▶ releases::task ──▶ resilience::retries
//!                                            │                    │
//!                                            ▼                    ▼
//!                                     releases::payload    releases::client ──▶ Releases API
//! ```
//!
//! A failed upload is logged and the process still exits 0, so it never
//! breaks the build that invoked it.

use std::path::PathBuf;

use clap::Parser;

use release_upload::config::validation::validate_config;
use release_upload::config::{load_config, ConfigError, ConfigHandle};
use release_upload::observability::logging::init_logging;
use release_upload::releases::vcs::SystemCommands;
use release_upload::releases::ReleasesTask;

#[derive(Parser)]
#[command(name = "release-upload")]
#[command(about = "Upload build release information with automatic retries", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "release-upload.toml")]
    config: PathBuf,

    /// Override the configured retry count (clamped to 0..=5)
    #[arg(short, long, allow_negative_numbers = true)]
    retry_count: Option<i64>,

    /// Override the Releases API endpoint
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Write the response body of a successful upload here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(retry_count) = cli.retry_count {
        config.retry_count = Some(retry_count);
    }
    if let Some(endpoint) = cli.endpoint {
        config.releases_endpoint = endpoint;
    }
    if let Some(output) = cli.output {
        config.request_output_file = Some(output);
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.log_level);

    tracing::info!(
        endpoint = %config.releases_endpoint,
        retry_count = ?config.retry_count,
        timeout_millis = config.timeout_millis,
        "Configuration loaded"
    );

    let task = ReleasesTask::new(ConfigHandle::new(config));
    if !task.run(&SystemCommands) {
        tracing::warn!("Release information was not uploaded");
    }

    Ok(())
}
