//! Releases API request body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::UploadConfig;
use crate::releases::vcs::{git_version, source_control_map, CommandRunner};

/// Value sent as `buildTool`.
pub const BUILD_TOOL: &str = "release-upload";

/// JSON body posted to the Releases API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasePayload {
    pub build_tool: String,
    pub api_key: String,
    pub app_version: String,
    pub app_version_code: String,
    pub metadata: BTreeMap<String, Option<String>>,
    pub source_control: BTreeMap<String, Option<String>>,
    pub builder_name: Option<String>,
}

impl ReleasePayload {
    /// Assemble the payload from configuration, filling gaps from the environment.
    pub fn generate(config: &UploadConfig, commands: &dyn CommandRunner) -> Self {
        let builder_name = config
            .builder_name
            .clone()
            .or_else(|| commands.run("whoami", &[]));

        Self {
            build_tool: BUILD_TOOL.to_string(),
            api_key: config.manifest.api_key.clone(),
            app_version: config.manifest.version_name.clone(),
            app_version_code: config.manifest.version_code.clone(),
            metadata: metadata_map(config, commands),
            source_control: source_control_map(&config.source_control, commands),
            builder_name,
        }
    }
}

fn metadata_map(
    config: &UploadConfig,
    commands: &dyn CommandRunner,
) -> BTreeMap<String, Option<String>> {
    let mut metadata = BTreeMap::from([
        ("os_arch".to_string(), Some(std::env::consts::ARCH.to_string())),
        ("os_name".to_string(), Some(std::env::consts::OS.to_string())),
        ("tool_version".to_string(), Some(env!("CARGO_PKG_VERSION").to_string())),
        ("git_version".to_string(), git_version(commands)),
    ]);

    for (key, value) in &config.metadata {
        metadata.insert(key.clone(), Some(value.clone()));
    }
    metadata
}
