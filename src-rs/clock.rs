use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) mod test_clock {
    use std::sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    };

    use super::Clock;

    #[derive(Clone, Debug)]
    pub struct ManualClock {
        now_ms: Arc<AtomicU64>,
    }

    impl ManualClock {
        pub fn new(now_ms: u64) -> Self {
            Self {
                now_ms: Arc::new(AtomicU64::new(now_ms)),
            }
        }

        pub fn advance_ms(&self, delta: u64) {
            self.now_ms.fetch_add(delta, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> u64 {
            self.now_ms.load(Ordering::SeqCst)
        }
    }
}
