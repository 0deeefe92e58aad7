use http::StatusCode;
use thiserror::Error;

/// Rejection outcome of a rate-limit check. This is normal control flow, not
/// a fault: it carries the retry guidance the caller needs to back off.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("Too many requests, retry after {retry_after_secs}s")]
pub struct RateLimitExceeded {
    /// Whole seconds until the caller's window resets, rounded up.
    pub retry_after_secs: u64,
}

impl RateLimitExceeded {
    pub fn status(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    /// Value for a `Retry-After` response header.
    pub fn retry_after_header(&self) -> String {
        self.retry_after_secs.to_string()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window duration must be greater than zero")]
    ZeroWindow,
    #[error("max tracked tokens must be greater than zero")]
    ZeroCapacity,
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidEnvVar { name: &'static str, value: String },
}
