//! Mock IP locator for testing and local development.
//!
//! The `MockIpLocator` resolves to a pre-configured location (or to nothing),
//! allowing tests and offline development to run without network access.

use async_trait::async_trait;

use vibecheck_shared::VoteLocation;

use crate::locator::IpLocator;

/// Mock locator that returns a pre-configured result.
pub struct MockIpLocator {
    location: Option<VoteLocation>,
}

impl MockIpLocator {
    /// Create a mock locator that always resolves to `location`.
    pub fn new(location: Option<VoteLocation>) -> Self {
        Self { location }
    }

    /// Create a mock locator that never resolves a location.
    pub fn none() -> Self {
        Self { location: None }
    }
}

#[async_trait]
impl IpLocator for MockIpLocator {
    async fn lookup(&self) -> Option<VoteLocation> {
        self.location.clone()
    }
}
