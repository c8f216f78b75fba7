//! Clock and throttle ports
//!
//! Time is injected so cache expiry and throttling delays can be
//! exercised in tests without waiting.

use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock [`Clock`]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Suspends evaluation between calls
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// [`Throttle`] backed by `tokio::time::sleep`
pub struct TokioThrottle;

#[async_trait]
impl Throttle for TokioThrottle {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[tokio::test]
    async fn test_tokio_throttle_zero_returns() {
        TokioThrottle.sleep(Duration::ZERO).await;
    }
}
