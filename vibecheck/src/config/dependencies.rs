//! Dependency initialization and wiring for the VibeCheck client.

use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::errors::VibeError;
use crate::lock::{DailyVoteLock, FileStore};
use crate::locator::{IpLocator, LocatorSource, DEFAULT_GEOIP_URL};
use vibecheck_repository::{VoteStoreConfig, VoteStoreService, VoteStoreSource};

/// Default document-store base URL.
const DEFAULT_STORE_URL: &str = "http://localhost:8080";

/// Default canonical votes collection.
const DEFAULT_VOTES_COLLECTION: &str = "votes";

/// Default legacy collections scanned on reads.
const DEFAULT_LEGACY_COLLECTIONS: &str = "moods";

/// Default data directory for durable client-side state.
const DEFAULT_DATA_DIR: &str = ".vibecheck";

/// Backend mode for the vote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Use the live document-store REST API.
    Rest,
    /// Use the in-memory mock store (offline development).
    Mock,
}

impl StoreMode {
    /// Parse the store mode from the environment.
    ///
    /// Valid values: "rest" or "mock" (case-insensitive).
    /// Defaults to "rest" if not set or invalid.
    fn from_env() -> Self {
        match env::var("VIBECHECK_STORE_MODE")
            .unwrap_or_else(|_| "rest".to_string())
            .to_lowercase()
            .as_str()
        {
            "mock" => Self::Mock,
            "rest" => Self::Rest,
            _ => {
                warn!("Invalid VIBECHECK_STORE_MODE, defaulting to 'rest'");
                Self::Rest
            }
        }
    }
}

/// Container for all initialized dependencies.
///
/// The store client handle is constructed once here and passed explicitly, so
/// the aggregator and the lock stay independently testable without a live
/// backend.
pub struct Dependencies {
    /// High-level vote store API.
    pub store: VoteStoreService,
    /// Best-effort IP geolocation.
    pub locator: Box<dyn IpLocator>,
    /// One-vote-per-day lock over durable local storage.
    pub lock: DailyVoteLock,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `VIBECHECK_STORE_MODE`: Backend mode - "rest" or "mock" (default: rest)
    /// - `VIBECHECK_STORE_URL`: Document store base URL (default: http://localhost:8080)
    /// - `VIBECHECK_VOTES_COLLECTION`: Canonical collection name (default: "votes")
    /// - `VIBECHECK_LEGACY_COLLECTIONS`: Comma-separated legacy collections scanned
    ///   on reads (default: "moods"; set empty to scan none)
    /// - `VIBECHECK_GEOIP_URL`: IP-geolocation endpoint (default: https://ipapi.co/json/)
    /// - `VIBECHECK_DATA_DIR`: Directory for durable client state (default: .vibecheck)
    ///
    /// Mock store mode implies offline development, so it also disables the
    /// live geolocation lookup.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(VibeError)` - If initialization fails
    pub fn new() -> Result<Self, VibeError> {
        let store_mode = StoreMode::from_env();
        let store_url =
            env::var("VIBECHECK_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let geoip_url =
            env::var("VIBECHECK_GEOIP_URL").unwrap_or_else(|_| DEFAULT_GEOIP_URL.to_string());
        let data_dir = PathBuf::from(
            env::var("VIBECHECK_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
        );

        let canonical_collection = env::var("VIBECHECK_VOTES_COLLECTION")
            .unwrap_or_else(|_| DEFAULT_VOTES_COLLECTION.to_string());
        let legacy_collections = env::var("VIBECHECK_LEGACY_COLLECTIONS")
            .unwrap_or_else(|_| DEFAULT_LEGACY_COLLECTIONS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        info!(
            store_mode = ?store_mode,
            store_url = %store_url,
            canonical_collection = %canonical_collection,
            legacy_collections = ?legacy_collections,
            data_dir = %data_dir.display(),
            "Initializing dependencies"
        );

        let store_config = VoteStoreConfig {
            canonical_collection,
            legacy_collections,
        };

        let (store_source, locator_source) = match store_mode {
            StoreMode::Rest => (
                VoteStoreSource::rest(store_url),
                LocatorSource::live(geoip_url),
            ),
            StoreMode::Mock => (VoteStoreSource::mock(), LocatorSource::mock(None)),
        };

        let store = VoteStoreService::with_config(store_source.into_provider(), store_config);
        let locator = locator_source.into_locator();
        let lock = DailyVoteLock::new(Box::new(FileStore::new(&data_dir)));

        Ok(Self {
            store,
            locator,
            lock,
        })
    }
}
