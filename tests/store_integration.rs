//! Integration tests for the trip store lifecycle
//!
//! These tests validate the complete path from repository fetch through
//! ingestion, filter commands, derived state, and change notification:
//! - One fetch per session, gated on "already has markers"
//! - Failure recording and user-initiated retry
//! - Filter scenarios across the visitor and year predicates
//! - Country indexes independent of the live filter
//! - Synchronous listener notification with scoped unsubscribe

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use triplog::repository::InMemoryRepository;
use triplog::store::{StoreEvent, TripStore, VisitorFilter};
use triplog::types::{Location, TripData, TripDate, TripRecord, VisitorRef};

// ============================================================================
// Helper Functions
// ============================================================================

fn record(
    id: &str,
    country: Option<&str>,
    visitor: Option<&str>,
    shared: &[&str],
    year: Option<i32>,
) -> TripRecord {
    TripRecord {
        id: id.to_string(),
        title: format!("Trip {}", id),
        location: country.map(|c| Location {
            lat: 0.0,
            lon: 0.0,
            country: c.to_string(),
            state: String::new(),
        }),
        trip: Some(TripData {
            visitor: visitor.map(String::from),
            visitors: shared
                .iter()
                .map(|n| VisitorRef::Name(n.to_string()))
                .collect(),
            date: year.map(|y| TripDate {
                year: Some(y),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// The three-record scenario: two solo trips in 2023, one shared in 2024
fn scenario_records() -> Vec<TripRecord> {
    vec![
        record("r1", Some("España"), Some("Lara"), &[], Some(2023)),
        record("r2", Some("Italia"), Some("Álvaro"), &[], Some(2023)),
        record("r3", Some("España"), None, &["Lara", "Álvaro"], Some(2024)),
    ]
}

fn ids(records: &[TripRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// Load Lifecycle
// ============================================================================

#[tokio::test]
async fn test_load_populates_store() {
    let store = TripStore::with_defaults();
    let repo = InMemoryRepository::new(scenario_records());

    assert!(store.markers().is_empty());
    store.load(&repo).await;

    assert_eq!(store.markers().len(), 3);
    assert_eq!(store.filtered_markers().len(), 3);
    assert!(!store.is_loading());
    assert!(store.error().is_none());
}

#[tokio::test]
async fn test_load_is_gated_once_markers_exist() {
    let store = TripStore::with_defaults();
    let repo = InMemoryRepository::new(scenario_records());

    store.load(&repo).await;
    store.set_visitor_filter(VisitorFilter::First);

    // A second load must not refetch or disturb the filter state.
    store.load(&repo).await;
    assert_eq!(store.markers().len(), 3);
    assert_eq!(store.filtered_markers().len(), 2);
}

#[tokio::test]
async fn test_failed_load_records_error_and_allows_retry() {
    let store = TripStore::with_defaults();
    let repo = InMemoryRepository::new(scenario_records());
    repo.fail_next_fetch("token expired");

    store.load(&repo).await;
    assert!(store.markers().is_empty());
    assert!(!store.is_loading());
    let error = store.error().expect("error is recorded for display");
    assert!(error.contains("token expired"));

    // Retry is user-initiated and always safe.
    store.load(&repo).await;
    assert_eq!(store.markers().len(), 3);
    assert!(store.error().is_none());
}

// ============================================================================
// Filter Scenarios
// ============================================================================

#[tokio::test]
async fn test_both_filter_keeps_only_shared_trip() {
    let store = TripStore::with_defaults();
    store.ingest(scenario_records());

    store.set_visitor_filter(VisitorFilter::Both);
    assert_eq!(ids(&store.filtered_markers()), vec!["r3"]);
}

#[tokio::test]
async fn test_year_filter_under_all() {
    let store = TripStore::with_defaults();
    store.ingest(scenario_records());

    store.set_visitor_filter(VisitorFilter::All);
    store.set_year_filter(Some(2023));
    assert_eq!(ids(&store.filtered_markers()), vec!["r1", "r2"]);
}

#[tokio::test]
async fn test_country_indexes_deduplicate_and_scope_by_traveler() {
    let store = TripStore::with_defaults();
    store.ingest(scenario_records());

    // Two matching records, one country entry.
    assert_eq!(store.distinct_countries_for("Lara"), vec!["España"]);
    assert_eq!(
        store.distinct_countries_for("Álvaro"),
        vec!["España", "Italia"]
    );
    assert_eq!(store.distinct_countries(), vec!["España", "Italia"]);
}

#[tokio::test]
async fn test_counts_by_year_over_full_set() {
    let store = TripStore::with_defaults();
    store.ingest(scenario_records());
    store.set_year_filter(Some(2024));

    // Aggregates over the full set ignore the live filter.
    let counts = store.counts_by_year();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&2023], 2);
    assert_eq!(counts[&2024], 1);
}

#[tokio::test]
async fn test_record_without_location_is_harmless() {
    let store = TripStore::with_defaults();
    let mut records = scenario_records();
    records.push(record("r4", None, Some("Lara"), &[], Some(2023)));

    store.ingest(records);

    // Excluded from country aggregates, present everywhere else.
    assert_eq!(store.distinct_countries(), vec!["España", "Italia"]);
    assert_eq!(store.markers().len(), 4);
    assert_eq!(store.counts_by_year()[&2023], 3);
}

// ============================================================================
// Change Notification
// ============================================================================

#[tokio::test]
async fn test_listeners_observe_load_and_commands() {
    let store = TripStore::with_defaults();
    let repo = InMemoryRepository::new(scenario_records());

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let _guard = store.subscribe(move |event| sink.lock().push(event.clone()));

    store.load(&repo).await;
    store.set_visitor_filter(VisitorFilter::Both);
    store.reset_filters();

    let events = events.lock();
    assert_eq!(
        *events,
        vec![
            StoreEvent::LoadStarted,
            StoreEvent::Loaded { count: 3 },
            StoreEvent::FilterChanged,
            StoreEvent::FiltersReset,
        ]
    );
}

#[tokio::test]
async fn test_dropped_guard_stops_notifications() {
    let store = TripStore::with_defaults();
    store.ingest(scenario_records());

    let hits = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&hits);
    let guard = store.subscribe(move |_| {
        sink.fetch_add(1, Ordering::Relaxed);
    });

    store.set_visitor_filter(VisitorFilter::First);
    drop(guard);
    store.set_visitor_filter(VisitorFilter::Second);

    assert_eq!(hits.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn test_listener_reads_consistent_derived_state() {
    let store = Arc::new(TripStore::with_defaults());
    store.ingest(scenario_records());

    // Whatever the event, the derived subset must already satisfy the
    // current filter state by the time a listener reads it.
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    let reader = Arc::clone(&store);
    let _guard = store.subscribe(move |_| {
        sink.lock().push(reader.filtered_markers().len());
    });

    store.set_visitor_filter(VisitorFilter::Both);
    store.set_year_filter(Some(2023));
    store.reset_filters();

    assert_eq!(*observed.lock(), vec![1, 0, 3]);
}
