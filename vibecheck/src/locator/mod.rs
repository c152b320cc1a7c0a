//! Best-effort IP geolocation for vote submissions.
//!
//! This module provides:
//! - [`IpLocator`] trait for abstracting the geolocation source
//! - [`IpApiLocator`] production client that queries a public IP-geolocation endpoint
//! - [`MockIpLocator`] mock client for testing without network access
//! - [`LocatorSource`] config enum for choosing between mock and live clients
//!
//! A missing location is an expected, common outcome: every failure mode of
//! the lookup (transport error, non-success status, malformed payload)
//! converts to `None`, never to an error the caller has to handle.

pub mod mock;

pub use mock::MockIpLocator;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::warn;

use vibecheck_shared::VoteLocation;

use crate::aggregator::normalize::coerce_finite;

/// Default public IP-geolocation endpoint.
pub const DEFAULT_GEOIP_URL: &str = "https://ipapi.co/json/";

/// Trait for resolving the caller's approximate location from their IP.
///
/// This trait abstracts the geolocation source to enable dependency injection
/// and mocking for testing. Production code uses [`IpApiLocator`], while
/// tests can use [`MockIpLocator`].
#[async_trait]
pub trait IpLocator: Send + Sync {
    /// Best-effort lookup of the caller's approximate location.
    ///
    /// Returns `None` on any failure; callers must treat a missing location
    /// as a normal outcome, not a failure to propagate.
    async fn lookup(&self) -> Option<VoteLocation>;
}

/// Production locator that queries a public IP-geolocation HTTP endpoint.
///
/// Performs a single unauthenticated GET returning a JSON object with numeric
/// `latitude`/`longitude` and optional string `city`/`region`/`country_name`.
/// No retries, no caching.
pub struct IpApiLocator {
    url: String,
    client: ReqwestClient,
}

impl IpApiLocator {
    /// Create a locator for the given endpoint URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: ReqwestClient::new(),
        }
    }

    async fn try_lookup(&self) -> Result<Option<VoteLocation>, reqwest::Error> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let payload: Value = response.json().await?;
        Ok(location_from_payload(&payload))
    }
}

#[async_trait]
impl IpLocator for IpApiLocator {
    async fn lookup(&self) -> Option<VoteLocation> {
        match self.try_lookup().await {
            Ok(location) => location,
            Err(e) => {
                warn!(error = %e, "Location lookup failed");
                None
            }
        }
    }
}

/// Extract a location from a geolocation response payload.
///
/// `latitude` and `longitude` must coerce to finite numbers (numeric strings
/// are tolerated, matching the stored-record decoder); the place names pass
/// through only when present and string-typed, validated for type but never
/// for correctness.
fn location_from_payload(payload: &Value) -> Option<VoteLocation> {
    let latitude = coerce_finite(payload.get("latitude"))?;
    let longitude = coerce_finite(payload.get("longitude"))?;

    let mut location = VoteLocation::new(latitude, longitude);
    location.city = payload.get("city").and_then(Value::as_str).map(str::to_string);
    location.region = payload
        .get("region")
        .and_then(Value::as_str)
        .map(str::to_string);
    location.country = payload
        .get("country_name")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(location)
}

/// Configuration for the geolocation source.
///
/// Use this to explicitly choose between mock and live locators.
///
/// # Example
///
/// ```ignore
/// use vibecheck::locator::LocatorSource;
/// use vibecheck_shared::VoteLocation;
///
/// // Development/testing: a fixed location (or none at all)
/// let locator = LocatorSource::mock(Some(VoteLocation::new(40.4, -3.7))).into_locator();
///
/// // Production: query the live endpoint
/// let locator = LocatorSource::live("https://ipapi.co/json/").into_locator();
/// ```
#[derive(Debug, Clone)]
pub enum LocatorSource {
    /// Always resolve to the given pre-configured location.
    Mock(Option<VoteLocation>),

    /// Query a live IP-geolocation endpoint.
    Live {
        /// The geolocation endpoint URL.
        url: String,
    },
}

impl LocatorSource {
    /// Create a mock locator source with a fixed result.
    pub fn mock(location: Option<VoteLocation>) -> Self {
        Self::Mock(location)
    }

    /// Create a live locator source for the given endpoint URL.
    pub fn live(url: impl Into<String>) -> Self {
        Self::Live { url: url.into() }
    }

    /// Create the appropriate `IpLocator` implementation.
    pub fn into_locator(self) -> Box<dyn IpLocator> {
        match self {
            Self::Mock(location) => Box::new(MockIpLocator::new(location)),
            Self::Live { url } => Box::new(IpApiLocator::new(&url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_with_coordinates_and_names() {
        let payload = json!({
            "latitude": 40.4168,
            "longitude": -3.7038,
            "city": "Madrid",
            "region": "Madrid",
            "country_name": "Spain"
        });

        let location = location_from_payload(&payload).expect("payload should resolve");
        assert_eq!(location.latitude, 40.4168);
        assert_eq!(location.longitude, -3.7038);
        assert_eq!(location.city.as_deref(), Some("Madrid"));
        assert_eq!(location.country.as_deref(), Some("Spain"));
    }

    #[test]
    fn test_payload_missing_longitude_yields_none() {
        let payload = json!({"latitude": 40.4168, "city": "Madrid"});
        assert!(location_from_payload(&payload).is_none());
    }

    #[test]
    fn test_numeric_string_coordinates_coerce() {
        let payload = json!({"latitude": "40.4", "longitude": -3.7});
        let location = location_from_payload(&payload).expect("payload should resolve");
        assert_eq!(location.latitude, 40.4);
        assert_eq!(location.longitude, -3.7);
    }

    #[test]
    fn test_non_coercible_coordinates_yield_none() {
        let payload = json!({"latitude": "91x", "longitude": -3.7});
        assert!(location_from_payload(&payload).is_none());
    }

    #[test]
    fn test_non_string_place_names_are_dropped() {
        let payload = json!({
            "latitude": 1.0,
            "longitude": 2.0,
            "city": 123,
            "country_name": "Spain"
        });

        let location = location_from_payload(&payload).unwrap();
        assert!(location.city.is_none());
        assert_eq!(location.country.as_deref(), Some("Spain"));
    }
}
