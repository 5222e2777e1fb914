//! Filter state and the pure derivation of the visible marker subset
//!
//! Everything here is a total function over well-typed records: a record
//! with missing optional fields simply fails the predicates, it never
//! errors. [`derive`] is the single source of truth for which markers are
//! visible under a filter; the store recomputes it synchronously after every
//! command so no stale derived state is ever observable.

use serde::{Deserialize, Serialize};

use crate::types::{TripRecord, VisitorPair};

/// Which traveler(s) the visible set is restricted to
///
/// `Both` is a conjunction: the record must carry both travelers, so it is
/// strictly more restrictive than either single-traveler filter. Whether a
/// particular view exposes `Both` is a presentation choice; the engine
/// treats it as first-class everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorFilter {
    /// No visitor constraint
    #[default]
    All,
    /// Only trips with the first traveler
    First,
    /// Only trips with the second traveler
    Second,
    /// Only trips with both travelers
    Both,
}

/// The current visitor/year constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Visitor constraint
    pub visitor: VisitorFilter,
    /// Exact-year constraint, `None` for no constraint
    pub year: Option<i32>,
}

impl FilterState {
    /// Whether this is the default (unconstrained) state
    pub fn is_default(&self) -> bool {
        self.visitor == VisitorFilter::All && self.year.is_none()
    }
}

/// Visitor predicate for a single record
///
/// A record with no visitor tags at all passes only under `All`.
pub fn matches_visitor(record: &TripRecord, filter: VisitorFilter, visitors: &VisitorPair) -> bool {
    match filter {
        VisitorFilter::All => true,
        VisitorFilter::First => record.has_visitor(&visitors.first),
        VisitorFilter::Second => record.has_visitor(&visitors.second),
        VisitorFilter::Both => {
            record.has_visitor(&visitors.first) && record.has_visitor(&visitors.second)
        },
    }
}

/// Year predicate for a single record
///
/// Records with no year fail any exact-year constraint.
pub fn matches_year(record: &TripRecord, year: Option<i32>) -> bool {
    match year {
        None => true,
        Some(year) => record.year() == Some(year),
    }
}

/// Full filter predicate: visitor AND year
pub fn matches(record: &TripRecord, state: &FilterState, visitors: &VisitorPair) -> bool {
    matches_visitor(record, state.visitor, visitors) && matches_year(record, state.year)
}

/// Derive the filtered subset of `markers` under `state`
///
/// Pure and idempotent; the result is always a subset of the input in input
/// order.
pub fn derive(
    markers: &[TripRecord],
    state: &FilterState,
    visitors: &VisitorPair,
) -> Vec<TripRecord> {
    markers
        .iter()
        .filter(|record| matches(record, state, visitors))
        .cloned()
        .collect()
}
