//! Releases upload task.
//!
//! # Responsibilities
//! - Build the release payload once
//! - Deliver it through the retry loop
//! - Persist the response body of a successful upload, once
//!
//! # Design Decisions
//! - Every delivery failure becomes `false` for the retry loop
//! - The task never returns an error; a failed upload must not fail a build
//! - Only the POST is retried; a failed response write never re-sends an accepted release

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::ConfigHandle;
use crate::releases::client::ReleasesClient;
use crate::releases::payload::ReleasePayload;
use crate::releases::types::UploadError;
use crate::releases::vcs::CommandRunner;
use crate::resilience::RetryingCall;

/// Gathers release information and uploads it with retries.
pub struct ReleasesTask {
    config: ConfigHandle,
}

impl ReleasesTask {
    pub fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    /// Run the upload. Returns whether it eventually succeeded, for logging only.
    pub fn run(&self, commands: &dyn CommandRunner) -> bool {
        let config = self.config.load();
        let payload = ReleasePayload::generate(&config, commands);

        let client = match ReleasesClient::new(
            &config.releases_endpoint,
            Duration::from_millis(config.timeout_millis),
        ) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create releases client");
                return false;
            }
        };

        tracing::info!(endpoint = %client.endpoint(), "Attempting upload to Releases API");

        let mut response = None;
        let mut attempt = || match client.deliver(&payload) {
            Ok(body) => {
                tracing::info!("Upload succeeded");
                response = Some(body);
                true
            }
            Err(UploadError::Status { status, body }) => {
                tracing::error!(status, body = %body, "Releases API rejected upload");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Request to Releases API failed");
                false
            }
        };

        RetryingCall::new(self.config.clone()).execute(&mut attempt);

        let Some(body) = response else {
            return false;
        };
        if let Some(path) = config.request_output_file.as_deref() {
            if let Err(e) = write_response(path, &body) {
                tracing::error!(path = %path.display(), error = %e, "Failed to write upload response");
            }
        }
        true
    }
}

fn write_response(path: &Path, body: &str) -> Result<(), UploadError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, body)?;
    Ok(())
}
