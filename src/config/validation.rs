//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0)
//! - Check the endpoint is a usable http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: UploadConfig → Result<(), Vec<ValidationError>>
//! - Retry count is never rejected; out-of-range values are clamped at use
//! - Unknown source control providers are dropped from the payload, not rejected

use thiserror::Error;
use url::Url;

use crate::config::schema::UploadConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("releases_endpoint '{0}' is not a valid URL")]
    InvalidEndpoint(String),

    #[error("releases_endpoint '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("timeout_millis must be greater than zero")]
    ZeroTimeout,

    #[error("manifest.api_key must not be empty")]
    MissingApiKey,
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &UploadConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.releases_endpoint) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(_) => errors.push(ValidationError::UnsupportedScheme(config.releases_endpoint.clone())),
        Err(_) => errors.push(ValidationError::InvalidEndpoint(config.releases_endpoint.clone())),
    }

    if config.timeout_millis == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.manifest.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
