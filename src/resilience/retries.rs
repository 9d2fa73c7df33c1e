//! Retry logic.
//!
//! # Responsibilities
//! - Resolve the configured retry count into a bounded retry budget
//! - Run an upload attempt, retrying immediately on failure
//! - Emit a warning before every retry
//!
//! # Design Decisions
//! - Budget is `min(max(configured, 0), MAX_RETRY_COUNT)`; unset means 0
//! - No backoff and no jitter; retries follow the failed attempt directly
//! - Budget is read once per `execute`, never mid-loop
//! - Exhausted retries are swallowed; uploads never fail the caller

/// Upper bound on retries, whatever the configuration asks for.
pub const MAX_RETRY_COUNT: u32 = 5;

/// One upload attempt. `true` means the upload went through.
///
/// Implementations map every failure (transport error, non-2xx status,
/// I/O) to `false`; the retry loop only looks at the boolean.
pub trait ApiCall {
    fn make_api_call(&mut self) -> bool;
}

impl<F> ApiCall for F
where
    F: FnMut() -> bool,
{
    fn make_api_call(&mut self) -> bool {
        self()
    }
}

/// Where the user-configured retry count comes from.
pub trait RetryCountSource {
    /// Raw configured value, `None` when the user never set one.
    fn configured_retry_count(&self) -> Option<i64>;
}

impl RetryCountSource for Option<i64> {
    fn configured_retry_count(&self) -> Option<i64> {
        *self
    }
}

impl<S: RetryCountSource + ?Sized> RetryCountSource for &S {
    fn configured_retry_count(&self) -> Option<i64> {
        (**self).configured_retry_count()
    }
}

/// Clamp a configured retry count to `[0, MAX_RETRY_COUNT]`.
pub fn resolve_retry_count(configured: Option<i64>) -> u32 {
    match configured {
        Some(count) if count > 0 => count.min(MAX_RETRY_COUNT as i64) as u32,
        _ => 0,
    }
}

/// Runs an [`ApiCall`] with a bounded number of immediate retries.
#[derive(Debug, Clone)]
pub struct RetryingCall<S> {
    source: S,
}

impl<S: RetryCountSource> RetryingCall<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Effective retry budget for the next execution.
    pub fn retry_count(&self) -> u32 {
        resolve_retry_count(self.source.configured_retry_count())
    }

    /// Attempts the upload, retrying while it fails and budget remains.
    pub fn execute<C: ApiCall + ?Sized>(&self, call: &mut C) {
        let max_retry_count = self.retry_count();
        let mut upload_successful = call.make_api_call();

        let mut attempt = 0;
        while !upload_successful && attempt < max_retry_count {
            attempt += 1;
            tracing::warn!("Retrying upload ({}/{}) ...", attempt, max_retry_count);
            upload_successful = call.make_api_call();
        }

        if !upload_successful {
            tracing::debug!(attempts = attempt + 1, "Upload attempts exhausted");
        }
    }
}
