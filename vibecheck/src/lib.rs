//! # VibeCheck
//!
//! Client for a minimal mood-voting aggregator: users submit a single daily
//! mood vote, optionally tagged with an approximate location, and recent votes
//! are reduced into per-mood counts and a list of geotagged points.
//!
//! ## Architecture
//!
//! 1. **Locator**: best-effort IP geolocation for the optional vote location
//! 2. **Vote store** (via `vibecheck-repository`): persists and fetches raw records
//! 3. **Aggregator**: reduces heterogeneous stored records to counts + points
//! 4. **Lock**: tracks the one-vote-per-calendar-day restriction locally
//!
//! ## Modules
//!
//! - [`aggregator`]: Vote normalization and aggregation over the 24h window
//! - [`config`]: Configuration and dependency initialization
//! - [`errors`]: Error types for the client
//! - [`locator`]: Best-effort IP geolocation
//! - [`lock`]: Daily vote lock backed by durable local storage

pub mod aggregator;
pub mod config;
pub mod errors;
pub mod lock;
pub mod locator;

pub use aggregator::{aggregate, VOTE_WINDOW_MS};
pub use config::Dependencies;
pub use errors::{LockError, VibeError};
