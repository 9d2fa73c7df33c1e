//! Releases API client.
//!
//! One call to [`ReleasesClient::deliver`] is one upload attempt; retrying is
//! the caller's business.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::releases::payload::ReleasePayload;
use crate::releases::types::UploadError;

/// Header carrying the project API key.
pub const API_KEY_HEADER: &str = "Bugsnag-Api-Key";

/// Blocking HTTP client for the Releases API.
#[derive(Debug, Clone)]
pub struct ReleasesClient {
    client: Client,
    endpoint: String,
}

impl ReleasesClient {
    /// Build a client whose connect and total timeouts are both `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, UploadError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload. Only a 200 counts as success; the body is returned.
    pub fn deliver(&self, payload: &ReleasePayload) -> Result<String, UploadError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &payload.api_key)
            .json(payload)
            .send()?;

        let status = response.status();
        let body = response.text().unwrap_or_default();

        if status != StatusCode::OK {
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
