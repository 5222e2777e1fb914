//! Triplog - in-memory trip record store and aggregation engine
//!
//! This library is the core of a travel-logging application for two named
//! travelers. It provides:
//!
//! - A read-only repository boundary to a remote document store
//! - A geography lookup classifying countries into continents
//! - An aggregation engine deriving filtered views, per-year counts,
//!   per-continent counts, and per-traveler country sets
//! - Synchronous change notification with scoped listener registration
//!
//! # Example
//!
//! ```rust
//! use triplog::repository::InMemoryRepository;
//! use triplog::store::{TripStore, VisitorFilter};
//! use triplog::types::TripRecord;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let store = TripStore::with_defaults();
//! let repo = InMemoryRepository::new(vec![TripRecord {
//!     id: "t1".to_string(),
//!     ..Default::default()
//! }]);
//!
//! store.load(&repo).await;
//! store.set_visitor_filter(VisitorFilter::Both);
//! assert!(store.filtered_markers().is_empty());
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

/// Geography lookup: country name to continent classification
pub mod geo;

/// Record repository boundary to the remote document store
pub mod repository;

/// Marker filtering and aggregation engine
pub mod store;

/// Configuration management with TOML support
pub mod config;

// Re-export main types
pub use config::StoreConfig;
pub use error::{DecodeError, Error, FetchError, Result};
pub use store::{FilterState, StoreEvent, TripStore, VisitorFilter};
pub use types::{TripRecord, VisitorPair};
