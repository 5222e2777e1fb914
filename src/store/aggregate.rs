//! Aggregate computations over the marker set
//!
//! All functions here are total: records lacking a country are excluded
//! from country aggregates, records lacking a year are excluded from year
//! aggregates, and unclassifiable country names are silently dropped from
//! continent counts. Nothing throws.
//!
//! The country indexes are recomputed from the full marker set on ingest
//! and are deliberately independent of the live filter: the country-map
//! filter UI derives its candidate set from the whole log, not from the
//! currently visible subset.

use std::collections::{BTreeMap, BTreeSet};

use crate::geo::{classify, Continent};
use crate::types::{TripRecord, VisitorPair};

/// Trips per year, keyed ascending by year
pub type YearCounts = BTreeMap<i32, u64>;

/// Trips per continent, keyed in continent order
pub type ContinentCounts = BTreeMap<Continent, u64>;

/// Count trips per year across the given markers
///
/// Records without a year are not counted; the sum of the counts equals the
/// number of records carrying a year.
pub fn counts_by_year(markers: &[TripRecord]) -> YearCounts {
    let mut counts = YearCounts::new();
    for record in markers {
        if let Some(year) = record.year() {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts
}

/// Per-year counts broken down by traveler
///
/// Feeds the trips-per-year chart: one total series plus one series per
/// traveler. A shared trip counts once in each traveler's series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearCountsByVisitor {
    /// All trips with a year
    pub total: YearCounts,
    /// Trips tagged with the first traveler
    pub first: YearCounts,
    /// Trips tagged with the second traveler
    pub second: YearCounts,
}

/// Count trips per year, total and per traveler
pub fn counts_by_year_by_visitor(
    markers: &[TripRecord],
    visitors: &VisitorPair,
) -> YearCountsByVisitor {
    let mut counts = YearCountsByVisitor::default();
    for record in markers {
        let Some(year) = record.year() else { continue };
        *counts.total.entry(year).or_insert(0) += 1;
        if record.has_visitor(&visitors.first) {
            *counts.first.entry(year).or_insert(0) += 1;
        }
        if record.has_visitor(&visitors.second) {
            *counts.second.entry(year).or_insert(0) += 1;
        }
    }
    counts
}

/// Count a country list per continent
///
/// Each name is classified through the geography lookup; unclassified names
/// are dropped. Callers typically pass one of the distinct-country indexes,
/// so a count here means "distinct countries on that continent".
pub fn counts_by_continent<S: AsRef<str>>(countries: &[S]) -> ContinentCounts {
    let mut counts = ContinentCounts::new();
    for country in countries {
        if let Some(continent) = classify(country.as_ref()) {
            *counts.entry(continent).or_insert(0) += 1;
        }
    }
    counts
}

/// Distinct-country indexes, recomputed wholesale on ingest
///
/// Each list is lexicographically sorted and deduplicated. The per-traveler
/// lists are always subsets of `all`; a record with no visitor tags
/// contributes only to `all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryIndex {
    /// Countries across every marker with a country
    pub all: Vec<String>,
    /// Countries on trips tagged with the first traveler
    pub first: Vec<String>,
    /// Countries on trips tagged with the second traveler
    pub second: Vec<String>,
}

impl CountryIndex {
    /// Build the indexes from the full marker set
    pub fn build(markers: &[TripRecord], visitors: &VisitorPair) -> Self {
        let mut all = BTreeSet::new();
        let mut first = BTreeSet::new();
        let mut second = BTreeSet::new();

        for record in markers {
            let Some(country) = record.country() else {
                continue;
            };
            all.insert(country.to_string());
            if record.has_visitor(&visitors.first) {
                first.insert(country.to_string());
            }
            if record.has_visitor(&visitors.second) {
                second.insert(country.to_string());
            }
        }

        Self {
            all: all.into_iter().collect(),
            first: first.into_iter().collect(),
            second: second.into_iter().collect(),
        }
    }
}

/// Distinct-country counts per continent, total and per traveler
///
/// Feeds the countries-per-continent radar and bar charts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinentBreakdown {
    /// Continent counts over all visited countries
    pub total: ContinentCounts,
    /// Continent counts over the first traveler's countries
    pub first: ContinentCounts,
    /// Continent counts over the second traveler's countries
    pub second: ContinentCounts,
}

impl ContinentBreakdown {
    /// Classify each country index through the geography lookup
    pub fn from_index(index: &CountryIndex) -> Self {
        Self {
            total: counts_by_continent(&index.all),
            first: counts_by_continent(&index.first),
            second: counts_by_continent(&index.second),
        }
    }
}
