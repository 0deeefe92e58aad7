use parking_lot::Mutex;
use serde::Serialize;

use crate::{
    clock::{Clock, SystemClock},
    config::LimiterConfig,
    error::RateLimitExceeded,
    store::{WindowEntry, WindowStore},
};

/// Bucket shared by all callers that present no token of their own.
const GLOBAL_TOKEN: &str = "global";

/// Successful outcome of a check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    pub limit: u32,
    pub remaining: u32,
    /// Epoch milliseconds at which this token's window resets.
    pub reset_at: u64,
}

/// Fixed-window rate limiter with a bounded token store.
///
/// Each token accumulates a count within a window of the configured length;
/// once the count reaches the limit passed to [`check`](Self::check), further
/// checks are rejected until the window resets. The limit is per call, not
/// stored, so different call sites may enforce different limits against the
/// same token.
///
/// The whole check runs under one lock, so two concurrent checks for the same
/// token can never both observe a count below the limit and both be admitted
/// past it.
#[derive(Debug)]
pub struct RateLimiter<C: Clock = SystemClock> {
    window_ms: u64,
    store: Mutex<WindowStore>,
    clock: C,
}

impl RateLimiter {
    pub fn new(config: LimiterConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(config: LimiterConfig, clock: C) -> Self {
        Self {
            window_ms: config.window().as_millis() as u64,
            store: Mutex::new(WindowStore::new(config.max_tracked_tokens())),
            clock,
        }
    }

    /// Admits or rejects one operation for `token` against `limit` checks per
    /// window. A rejection does not count against the window, so a caller
    /// hammering past its limit does not push its own reset out.
    ///
    /// A blank `token` is counted against a single shared global bucket.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero. A zero limit is a call-site bug, not a
    /// configuration to honor.
    pub fn check(&self, limit: u32, token: &str) -> Result<Admission, RateLimitExceeded> {
        assert!(limit > 0, "rate limit must be greater than zero");

        let token = if token.trim().is_empty() {
            GLOBAL_TOKEN
        } else {
            token
        };
        let now = self.clock.now_millis();

        let mut store = self.store.lock();

        let entry = match store.get(token) {
            Some(entry) if now < entry.window_reset_at => entry,
            _ => WindowEntry {
                count: 0,
                window_reset_at: now + self.window_ms,
            },
        };

        if entry.count >= limit {
            let retry_after_secs = entry.window_reset_at.saturating_sub(now).div_ceil(1000);
            return Err(RateLimitExceeded { retry_after_secs });
        }

        let entry = WindowEntry {
            count: entry.count + 1,
            window_reset_at: entry.window_reset_at,
        };
        store.put(token, entry);

        Ok(Admission {
            limit,
            remaining: limit - entry.count,
            reset_at: entry.window_reset_at,
        })
    }

    /// Number of tokens currently tracked, bounded by the configured capacity.
    pub fn tracked_tokens(&self) -> usize {
        self.store.lock().len()
    }
}
