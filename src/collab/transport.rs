//! Transport collaborator

use crate::error::Result;
use crate::remote::PageRequest;
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use tokio::sync::OwnedSemaphorePermit;

/// Proof that the single-flight guard is held
///
/// Dropping the permit releases the guard.
#[derive(Debug, Default)]
pub struct RequestPermit {
    permit: Option<OwnedSemaphorePermit>,
}

impl RequestPermit {
    /// Wrap a semaphore permit
    pub fn new(permit: OwnedSemaphorePermit) -> Self {
        Self {
            permit: Some(permit),
        }
    }

    /// A permit for transports without overlapping requests
    pub fn unguarded() -> Self {
        Self::default()
    }

    pub fn is_guarded(&self) -> bool {
        self.permit.is_some()
    }
}

/// Sends page requests on behalf of the controller
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base URL requests are sent to
    fn url(&self) -> String;

    /// Persistent caller parameters sent with every request
    fn params(&self) -> JsonObject;

    /// Acquire the single-flight guard, waiting for any active request
    async fn block_active_request(&self) -> RequestPermit;

    /// Send a page request and return the decoded response body
    async fn send(&self, request: &PageRequest, progressive: bool) -> Result<JsonValue>;
}
