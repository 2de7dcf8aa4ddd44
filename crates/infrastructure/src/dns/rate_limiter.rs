//! Token bucket limiting the query rate of one DNS client.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_BURST: u32 = 5;

/// Async token bucket.
///
/// `acquire` reserves a token and sleeps until it is due, so concurrent
/// callers queue up in reservation order instead of polling. A rate of zero
/// disables limiting.
pub struct RateLimiter {
    bucket: Option<Mutex<TokenBucket>>,
}

#[derive(Debug)]
struct TokenBucket {
    /// Goes negative while tokens are reserved ahead of time.
    tokens: f64,
    capacity: f64,
    refill_rate: f64,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new(queries_per_second: u32, burst: u32) -> Self {
        if queries_per_second == 0 {
            return Self::unlimited();
        }
        let capacity = f64::from(burst.max(1));
        Self {
            bucket: Some(Mutex::new(TokenBucket {
                tokens: capacity,
                capacity,
                refill_rate: f64::from(queries_per_second),
                last_refill: Instant::now(),
            })),
        }
    }

    pub fn unlimited() -> Self {
        Self { bucket: None }
    }

    pub fn is_limited(&self) -> bool {
        self.bucket.is_some()
    }

    /// Waits until the caller may send one query and returns how long that took.
    pub async fn acquire(&self) -> Duration {
        let Some(bucket) = &self.bucket else {
            return Duration::ZERO;
        };

        let wait = bucket
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reserve(Instant::now());

        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
        wait
    }
}

impl TokenBucket {
    fn reserve(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.refill_rate).min(self.capacity);
        self.last_refill = now;

        self.tokens -= 1.0;
        if self.tokens >= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(-self.tokens / self.refill_rate)
        }
    }
}
