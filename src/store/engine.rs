//! The trip store: owns the marker set and every derived view
//!
//! One `TripStore` instance is constructed at application start and handed
//! to consumers by reference; there is no ambient global. All state lives
//! behind a single lock, commands recompute derived state before releasing
//! it, and listeners are notified synchronously after every completed
//! command — a read between a command and the next event never observes a
//! stale `filtered_markers`.
//!
//! The marker set is loaded once per session and is immutable afterwards:
//! [`ingest`](TripStore::ingest) replaces it wholesale and is the sole
//! mutation point for records. Filter commands only change which subset is
//! visible. Every derivation is a full O(n) recompute over the in-memory
//! set; the working set is one household's travel log, so incremental
//! updates would be complexity without payoff.

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::aggregate::{
    counts_by_year, counts_by_year_by_visitor, ContinentBreakdown, CountryIndex, YearCounts,
    YearCountsByVisitor,
};
use super::filter::{self, FilterState, VisitorFilter};
use super::listeners::{ListenerGuard, ListenerSet, StoreEvent};
use crate::repository::RecordRepository;
use crate::types::{TripRecord, VisitorPair};

#[derive(Default)]
struct StoreState {
    markers: Vec<TripRecord>,
    filtered: Vec<TripRecord>,
    filter: FilterState,
    countries: CountryIndex,
    is_loading: bool,
    error: Option<String>,
}

impl StoreState {
    fn rederive(&mut self, visitors: &VisitorPair) {
        self.filtered = filter::derive(&self.markers, &self.filter, visitors);
    }
}

/// In-memory trip record store and aggregation engine
pub struct TripStore {
    visitors: VisitorPair,
    state: RwLock<StoreState>,
    listeners: ListenerSet,
}

impl TripStore {
    /// Create an empty store for the given traveler pair
    pub fn new(visitors: VisitorPair) -> Self {
        Self {
            visitors,
            state: RwLock::new(StoreState::default()),
            listeners: ListenerSet::new(),
        }
    }

    /// Create an empty store with the default traveler pair
    pub fn with_defaults() -> Self {
        Self::new(VisitorPair::default())
    }

    /// The traveler pair this store aggregates for
    pub fn visitors(&self) -> &VisitorPair {
        &self.visitors
    }

    // ========================================================================
    // Loading and ingestion
    // ========================================================================

    /// Fetch the record collection and ingest it
    ///
    /// One logical fetch per session: if the store already has markers or a
    /// fetch is in flight, this returns immediately. On failure the error is
    /// recorded for display, markers keep their prior value, and calling
    /// `load` again later is the retry path — always safe, never automatic.
    pub async fn load(&self, repository: &dyn RecordRepository) {
        {
            let mut state = self.state.write();
            if !state.markers.is_empty() {
                debug!("Markers already loaded, skipping fetch");
                return;
            }
            if state.is_loading {
                debug!("Fetch already in flight, skipping");
                return;
            }
            state.is_loading = true;
            state.error = None;
        }
        self.listeners.notify(&StoreEvent::LoadStarted);

        match repository.fetch_all().await {
            Ok(records) => self.ingest(records),
            Err(err) => {
                warn!(error = %err, "Record fetch failed");
                let message = err.to_string();
                {
                    let mut state = self.state.write();
                    state.is_loading = false;
                    state.error = Some(message.clone());
                }
                self.listeners.notify(&StoreEvent::LoadFailed { error: message });
            },
        }
    }

    /// Replace the marker set wholesale and recompute all derived state
    ///
    /// Recomputes the country indexes from the full set (independent of the
    /// live filter) and re-derives the filtered subset under the current
    /// filter state.
    pub fn ingest(&self, records: Vec<TripRecord>) {
        let count = records.len();
        {
            let mut state = self.state.write();
            state.countries = CountryIndex::build(&records, &self.visitors);
            state.markers = records;
            state.is_loading = false;
            state.error = None;
            state.rederive(&self.visitors);
        }
        info!(count, "Markers ingested");
        self.listeners.notify(&StoreEvent::Loaded { count });
    }

    // ========================================================================
    // Filter commands
    // ========================================================================

    /// Set the visitor filter and re-derive the visible subset
    pub fn set_visitor_filter(&self, visitor: VisitorFilter) {
        {
            let mut state = self.state.write();
            state.filter.visitor = visitor;
            state.rederive(&self.visitors);
        }
        debug!(?visitor, "Visitor filter applied");
        self.listeners.notify(&StoreEvent::FilterChanged);
    }

    /// Set or clear the year filter and re-derive the visible subset
    pub fn set_year_filter(&self, year: Option<i32>) {
        {
            let mut state = self.state.write();
            state.filter.year = year;
            state.rederive(&self.visitors);
        }
        debug!(?year, "Year filter applied");
        self.listeners.notify(&StoreEvent::FilterChanged);
    }

    /// Restore the default filter state and re-derive
    pub fn reset_filters(&self) {
        {
            let mut state = self.state.write();
            state.filter = FilterState::default();
            state.rederive(&self.visitors);
        }
        debug!("Filters reset");
        self.listeners.notify(&StoreEvent::FiltersReset);
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    /// All markers in the store
    pub fn markers(&self) -> Vec<TripRecord> {
        self.state.read().markers.clone()
    }

    /// The subset of markers satisfying the current filter state
    pub fn filtered_markers(&self) -> Vec<TripRecord> {
        self.state.read().filtered.clone()
    }

    /// Whether a fetch is currently in flight
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    /// The last fetch failure, for display
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// The current filter state
    pub fn filter_state(&self) -> FilterState {
        self.state.read().filter
    }

    /// Sorted distinct countries across all markers
    pub fn distinct_countries(&self) -> Vec<String> {
        self.state.read().countries.all.clone()
    }

    /// Sorted distinct countries for one traveler, by name
    ///
    /// Returns the empty set for names outside the configured pair.
    pub fn distinct_countries_for(&self, name: &str) -> Vec<String> {
        let state = self.state.read();
        if name == self.visitors.first {
            state.countries.first.clone()
        } else if name == self.visitors.second {
            state.countries.second.clone()
        } else {
            Vec::new()
        }
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Trips per year over all markers, ascending by year
    pub fn counts_by_year(&self) -> YearCounts {
        counts_by_year(&self.state.read().markers)
    }

    /// Trips per year broken down by traveler
    pub fn counts_by_year_by_visitor(&self) -> YearCountsByVisitor {
        counts_by_year_by_visitor(&self.state.read().markers, &self.visitors)
    }

    /// Trips per year under the current visitor filter, descending by year
    ///
    /// Applies the visitor predicate only: the result is itself a breakdown
    /// by year, so the year filter is deliberately ignored.
    pub fn counts_by_year_for_current_filter(&self) -> Vec<(i32, u64)> {
        let state = self.state.read();
        let visitor_only = FilterState {
            visitor: state.filter.visitor,
            year: None,
        };
        let restricted = filter::derive(&state.markers, &visitor_only, &self.visitors);
        drop(state);

        let mut counts: Vec<(i32, u64)> = counts_by_year(&restricted).into_iter().collect();
        counts.reverse();
        counts
    }

    /// Distinct-country counts per continent, total and per traveler
    pub fn continent_breakdown(&self) -> ContinentBreakdown {
        ContinentBreakdown::from_index(&self.state.read().countries)
    }

    // ========================================================================
    // Change notification
    // ========================================================================

    /// Register a change listener; dropping the guard unregisters it
    ///
    /// The listener runs synchronously on the thread that completed the
    /// command.
    pub fn subscribe(
        &self,
        listener: impl Fn(&StoreEvent) + Send + Sync + 'static,
    ) -> ListenerGuard {
        self.listeners.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, TripData, TripDate};

    fn record(id: &str, country: &str, visitor: &str, year: i32) -> TripRecord {
        TripRecord {
            id: id.to_string(),
            location: Some(Location {
                lat: 0.0,
                lon: 0.0,
                country: country.to_string(),
                state: String::new(),
            }),
            trip: Some(TripData {
                visitor: Some(visitor.to_string()),
                date: Some(TripDate {
                    year: Some(year),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_ingest_derives_under_default_filter() {
        let store = TripStore::with_defaults();
        store.ingest(vec![record("a", "España", "Lara", 2023)]);

        assert_eq!(store.markers().len(), 1);
        assert_eq!(store.filtered_markers(), store.markers());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_filter_commands_rederive_synchronously() {
        let store = TripStore::with_defaults();
        store.ingest(vec![
            record("a", "España", "Lara", 2023),
            record("b", "Italia", "Álvaro", 2023),
        ]);

        store.set_visitor_filter(VisitorFilter::First);
        assert_eq!(store.filtered_markers().len(), 1);
        assert_eq!(store.filtered_markers()[0].id, "a");

        store.set_year_filter(Some(1999));
        assert!(store.filtered_markers().is_empty());

        store.set_year_filter(None);
        assert_eq!(store.filtered_markers().len(), 1);
    }

    #[test]
    fn test_reset_restores_full_set() {
        let store = TripStore::with_defaults();
        store.ingest(vec![
            record("a", "España", "Lara", 2023),
            record("b", "Italia", "Álvaro", 2024),
        ]);
        store.set_visitor_filter(VisitorFilter::Second);
        store.set_year_filter(Some(2024));

        store.reset_filters();
        assert!(store.filter_state().is_default());
        assert_eq!(store.filtered_markers(), store.markers());
    }

    #[test]
    fn test_distinct_countries_ignore_live_filter() {
        let store = TripStore::with_defaults();
        store.ingest(vec![
            record("a", "España", "Lara", 2023),
            record("b", "Italia", "Álvaro", 2023),
        ]);
        store.set_visitor_filter(VisitorFilter::First);

        // The candidate country set is derived from the full log.
        assert_eq!(store.distinct_countries(), vec!["España", "Italia"]);
        assert_eq!(store.distinct_countries_for("Álvaro"), vec!["Italia"]);
        assert!(store.distinct_countries_for("nadie").is_empty());
    }

    #[test]
    fn test_counts_for_current_filter_descending() {
        let store = TripStore::with_defaults();
        store.ingest(vec![
            record("a", "España", "Lara", 2021),
            record("b", "Italia", "Lara", 2023),
            record("c", "Francia", "Álvaro", 2022),
        ]);
        store.set_visitor_filter(VisitorFilter::First);
        // Year filter must not affect this breakdown.
        store.set_year_filter(Some(2021));

        let counts = store.counts_by_year_for_current_filter();
        assert_eq!(counts, vec![(2023, 1), (2021, 1)]);
    }
}
