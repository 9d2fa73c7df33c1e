//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for an upload.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for a release upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Retries after a failed upload. Unset means no retries.
    pub retry_count: Option<i64>,

    /// Connect and call timeout for one attempt, in milliseconds.
    pub timeout_millis: u64,

    /// Releases API endpoint.
    pub releases_endpoint: String,

    /// Name of the person or machine running the build.
    pub builder_name: Option<String>,

    /// Where to write the response body of a successful upload.
    pub request_output_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Extra metadata, merged over the collected defaults.
    pub metadata: BTreeMap<String, String>,

    /// Source control overrides.
    pub source_control: SourceControlConfig,

    /// Application identity.
    pub manifest: ManifestInfo,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            retry_count: None,
            timeout_millis: 60_000,
            releases_endpoint: "https://build.bugsnag.com".to_string(),
            builder_name: None,
            request_output_file: None,
            log_level: "info".to_string(),
            metadata: BTreeMap::new(),
            source_control: SourceControlConfig::default(),
            manifest: ManifestInfo::default(),
        }
    }
}

/// Source control settings. Anything unset is read from git.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SourceControlConfig {
    /// Hosting provider, e.g. "github".
    pub provider: Option<String>,

    /// Repository URL.
    pub repository: Option<String>,

    /// Commit hash.
    pub revision: Option<String>,
}

/// Identity of the application being released.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ManifestInfo {
    pub api_key: String,
    pub version_name: String,
    pub version_code: String,
}
