//! Source control detection.
//!
//! # Responsibilities
//! - Run shell commands and capture trimmed stdout
//! - Recognise hosting providers from repository URLs
//! - Fill in repository, revision and provider from git when not configured

use std::collections::BTreeMap;
use std::process::{Command, Stdio};

use crate::config::SourceControlConfig;

/// Known source control providers, most specific first.
pub const VALID_VCS_PROVIDERS: [&str; 6] = [
    "github-enterprise",
    "bitbucket-server",
    "gitlab-onpremise",
    "bitbucket",
    "github",
    "gitlab",
];

const VCS_COMMAND: &str = "git";

/// Runs external commands on behalf of the payload builder.
pub trait CommandRunner {
    /// Trimmed stdout, or `None` if the command could not run or failed.
    fn run(&self, program: &str, args: &[&str]) -> Option<String>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommands;

impl CommandRunner for SystemCommands {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(program, error = %e, "Failed to run command");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(program, ?args, status = %output.status, "Command exited unsuccessfully");
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// `None` is valid (provider omitted); otherwise it must be a known provider.
pub fn is_valid_vcs_provider(provider: Option<&str>) -> bool {
    match provider {
        None => true,
        Some(p) => VALID_VCS_PROVIDERS.iter().any(|known| *known == p),
    }
}

/// First known provider whose name appears in the URL.
pub fn parse_provider_url(url: Option<&str>) -> Option<&'static str> {
    let url = url?;
    VALID_VCS_PROVIDERS.iter().copied().find(|provider| url.contains(provider))
}

/// Build the `sourceControl` object, asking git for anything not configured.
pub fn source_control_map(
    config: &SourceControlConfig,
    commands: &dyn CommandRunner,
) -> BTreeMap<String, Option<String>> {
    let repository = config
        .repository
        .clone()
        .or_else(|| commands.run(VCS_COMMAND, &["config", "--get", "remote.origin.url"]));
    let revision = config
        .revision
        .clone()
        .or_else(|| commands.run(VCS_COMMAND, &["rev-parse", "HEAD"]));
    let provider = config
        .provider
        .clone()
        .or_else(|| parse_provider_url(repository.as_deref()).map(str::to_string));

    let mut map = BTreeMap::new();
    map.insert("repository".to_string(), repository);
    map.insert("revision".to_string(), revision);
    match provider {
        Some(p) if is_valid_vcs_provider(Some(&p)) => {
            map.insert("provider".to_string(), Some(p));
        }
        Some(p) => {
            tracing::warn!(
                provider = %p,
                expected = %VALID_VCS_PROVIDERS.join(", "),
                "Ignoring unknown source control provider"
            );
        }
        None => {}
    }
    map
}

/// `git --version` output.
pub fn git_version(commands: &dyn CommandRunner) -> Option<String> {
    commands.run(VCS_COMMAND, &["--version"])
}
