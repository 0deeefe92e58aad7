//! Fixed-window rate limiting with a bounded, in-memory token store.
//!
//! A [`RateLimiter`] caps how many operations a caller token (an IP address,
//! an API key) may perform within a rolling window, while keeping the memory
//! used to track tokens bounded even under unbounded token churn. Rejections
//! come back as [`RateLimitExceeded`] values carrying retry guidance for the
//! HTTP boundary to turn into a 429 with a `Retry-After` header.

pub mod clock;
pub mod config;
pub mod error;
pub mod limiter;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use config::LimiterConfig;
pub use error::{ConfigError, RateLimitExceeded};
pub use limiter::{Admission, RateLimiter};
