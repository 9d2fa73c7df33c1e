//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Upload attempt:
//!     → retries.rs (resolve budget from config, run attempt)
//!     → on `false`: warn and attempt again until budget is spent
//!     → return to caller, success or not
//! ```

pub mod retries;

pub use retries::{resolve_retry_count, ApiCall, RetryCountSource, RetryingCall, MAX_RETRY_COUNT};
