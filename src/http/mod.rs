//! HTTP transport module
//!
//! Provides the reqwest-backed [`Transport`](crate::collab::Transport)
//! used for remote and progressive pagination.
//!
//! # Features
//!
//! - **Single-flight guard**: at most one page request in flight per transport
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Query Encoding**: Nested sorter/filter parameters in bracket notation

mod rate_limit;
mod transport;

pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{encode_query, HttpTransport, HttpTransportConfig};
