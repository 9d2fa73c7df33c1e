//! Releases upload subsystem.
//!
//! # Data Flow
//! ```text
//! UploadConfig
//!     → payload.rs (collect metadata, source control via vcs.rs)
//!     → task.rs (retrying upload)
//!     → client.rs (one HTTP POST per attempt)
//!     → response written to request_output_file
//! ```

pub mod client;
pub mod payload;
pub mod task;
pub mod types;
pub mod vcs;

pub use client::ReleasesClient;
pub use payload::ReleasePayload;
pub use task::ReleasesTask;
pub use types::UploadError;
