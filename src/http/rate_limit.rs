//! Page request throttling
//!
//! One governor token bucket per transport. Progressive loading sends the
//! next request as soon as a page is applied, so a long append run would
//! otherwise reach the server as fast as responses come back.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

type DirectBucket = Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Page request budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimiterConfig {
    /// Sustained page requests per second
    pub requests_per_second: u32,
    /// Requests allowed back to back before throttling starts
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst_size: 10,
        }
    }
}

impl RateLimiterConfig {
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }

    /// Governor quota; zero values count as one
    pub fn quota(&self) -> Quota {
        let per_second = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(per_second).allow_burst(burst)
    }
}

/// Shared throttle for the requests of one transport
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<DirectBucket>,
    throttled: Arc<AtomicU64>,
}

impl RateLimiter {
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            bucket: Arc::new(Governor::direct(config.quota())),
            throttled: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Take a token, waiting for one when the burst is used up
    pub async fn wait(&self) {
        if self.bucket.check().is_ok() {
            return;
        }

        self.throttled.fetch_add(1, Ordering::Relaxed);
        debug!("Page request throttled");
        self.bucket.until_ready().await;
    }

    /// Number of requests that had to wait for a token
    pub fn throttled_count(&self) -> u64 {
        self.throttled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("throttled", &self.throttled_count())
            .finish_non_exhaustive()
    }
}
