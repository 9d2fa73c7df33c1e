//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → UploadConfig (validated, immutable)
//!     → ConfigHandle (shared, swappable between uploads)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes replace it wholesale
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::resilience::RetryCountSource;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ManifestInfo, SourceControlConfig, UploadConfig};

/// Shared handle to the current configuration.
///
/// Readers always see a complete snapshot; `store` swaps it atomically.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<ArcSwap<UploadConfig>>,
}

impl ConfigHandle {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Current configuration snapshot.
    pub fn load(&self) -> Arc<UploadConfig> {
        self.inner.load_full()
    }

    /// Replace the configuration seen by later readers.
    pub fn store(&self, config: UploadConfig) {
        self.inner.store(Arc::new(config));
        tracing::debug!("Configuration replaced");
    }
}

impl RetryCountSource for ConfigHandle {
    fn configured_retry_count(&self) -> Option<i64> {
        self.inner.load().retry_count
    }
}
