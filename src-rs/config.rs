use std::{env, time::Duration};

use crate::error::ConfigError;

const DEFAULT_WINDOW_MS: u64 = 15 * 60 * 1000;
const DEFAULT_MAX_TRACKED_TOKENS: u64 = 10_000;

/// Limiter configuration, fixed at construction.
#[derive(Clone, Debug)]
pub struct LimiterConfig {
    window: Duration,
    max_tracked_tokens: usize,
}

impl LimiterConfig {
    pub fn new(window: Duration, max_tracked_tokens: usize) -> Result<Self, ConfigError> {
        if window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }
        if max_tracked_tokens == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            window,
            max_tracked_tokens,
        })
    }

    /// Reads `RATE_LIMIT_WINDOW_MS` and `RATE_LIMIT_MAX_TRACKED_TOKENS`.
    /// Unset variables fall back to defaults; a variable that is set but not
    /// a positive integer is an error, so a misconfigured deployment fails at
    /// startup instead of running with a clamped value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let window_ms = parse_positive(
            env::var("RATE_LIMIT_WINDOW_MS").ok(),
            DEFAULT_WINDOW_MS,
            "RATE_LIMIT_WINDOW_MS",
        )?;
        let max_tracked_tokens = parse_positive(
            env::var("RATE_LIMIT_MAX_TRACKED_TOKENS").ok(),
            DEFAULT_MAX_TRACKED_TOKENS,
            "RATE_LIMIT_MAX_TRACKED_TOKENS",
        )?;

        Self::new(
            Duration::from_millis(window_ms),
            max_tracked_tokens as usize,
        )
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_tracked_tokens(&self) -> usize {
        self.max_tracked_tokens
    }
}

fn parse_positive(
    value: Option<String>,
    fallback: u64,
    name: &'static str,
) -> Result<u64, ConfigError> {
    match value {
        None => Ok(fallback),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|parsed| *parsed > 0)
            .ok_or(ConfigError::InvalidEnvVar { name, value: raw }),
    }
}
