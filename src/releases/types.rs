//! Release upload types and error definitions.

use thiserror::Error;

/// Errors that can occur during a single delivery attempt.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Connection failed, timed out, or the request could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200.
    #[error("Releases API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response could not be written to the output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
