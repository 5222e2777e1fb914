//! Marker filtering and aggregation engine
//!
//! The core of the crate: [`TripStore`] owns the full marker set, the
//! current filter selection, the derived filtered subset, and the computed
//! aggregates, and keeps them consistent across every filter command.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   Record Repository  │  fetch_all() — once per session
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │      TripStore       │  markers + FilterState
//! │  ┌────────────────┐  │
//! │  │ derive()       │  │  filtered_markers (always consistent)
//! │  │ CountryIndex   │  │  distinct countries, per traveler
//! │  │ YearCounts     │  │  trips per year
//! │  │ ContinentCounts│  │  countries per continent
//! │  └────────────────┘  │
//! └──────────┬───────────┘
//!            │ StoreEvent (synchronous)
//!            ▼
//! ┌──────────┬───────────┐
//! │ Listener │ Listener  │  view adapters, scoped by ListenerGuard
//! └──────────┴───────────┘
//! ```

pub mod aggregate;
pub mod engine;
pub mod filter;
pub mod listeners;

pub use aggregate::{
    counts_by_continent, counts_by_year, counts_by_year_by_visitor, ContinentBreakdown,
    ContinentCounts, CountryIndex, YearCounts, YearCountsByVisitor,
};
pub use engine::TripStore;
pub use filter::{derive, FilterState, VisitorFilter};
pub use listeners::{ListenerGuard, ListenerSet, StoreEvent};
