//! Release upload library: retrying delivery of build releases.

pub mod config;
pub mod observability;
pub mod releases;
pub mod resilience;

pub use config::{ConfigHandle, UploadConfig};
pub use releases::ReleasesTask;
pub use resilience::{ApiCall, RetryCountSource, RetryingCall, MAX_RETRY_COUNT};
