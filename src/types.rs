//! Core data types for the trip record store
//!
//! This module defines the record schema shared with the remote document
//! store, plus the small helpers the aggregation engine builds on:
//!
//! # Key Types
//!
//! - **`TripRecord`**: one logged trip (title, image, location, trip data)
//! - **`Location`**: coordinates plus free-text country/state names
//! - **`TripData`**: visitor tags, description, and trip dates
//! - **`VisitorRef`**: a plain traveler name or an unresolved external
//!   document reference
//! - **`VisitorPair`**: the two named travelers the store aggregates for
//!
//! All wire field names are camelCase; the `trip` field is serialized as
//! `data` to match the externally-owned schema. Every field below the record
//! id is optional on the wire — absence means "not counted", never an error.
//!
//! # Example
//!
//! ```rust
//! use triplog::types::{TripRecord, VisitorPair};
//!
//! let pair = VisitorPair::default();
//! assert_eq!(pair.first, "Lara");
//!
//! let record: TripRecord = serde_json::from_value(serde_json::json!({
//!     "id": "t1",
//!     "title": "Roadtrip",
//!     "imageUrl": "",
//!     "location": { "lat": 40.4, "lon": -3.7, "country": "España", "state": "Madrid" },
//!     "data": { "visitor": "Lara", "date": { "year": 2023 } }
//! })).unwrap();
//!
//! assert!(record.has_visitor("Lara"));
//! assert_eq!(record.year(), Some(2023));
//! assert_eq!(record.country(), Some("España"));
//! ```

use serde::{Deserialize, Serialize};

/// The two named travelers the store aggregates for
///
/// Injected at store construction so the engine never hardcodes names.
/// Defaults match the deployed travel log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorPair {
    /// First traveler's display name
    pub first: String,
    /// Second traveler's display name
    pub second: String,
}

impl Default for VisitorPair {
    fn default() -> Self {
        Self {
            first: "Lara".to_string(),
            second: "Álvaro".to_string(),
        }
    }
}

impl VisitorPair {
    /// Create a pair from two names
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Geographic position of a trip
///
/// `country` and `state` are free-text names in the source locale (Spanish);
/// `country` is the join key into the geography lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Country name in the source locale
    #[serde(default)]
    pub country: String,
    /// State or region name
    #[serde(default)]
    pub state: String,
}

/// Date information for a trip
///
/// All fields are optional; `year` is the only one the engine aggregates on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDate {
    /// Calendar year of the trip
    #[serde(default)]
    pub year: Option<i32>,
    /// Month (1-12)
    #[serde(default)]
    pub month: Option<u32>,
    /// Start date as an opaque display string
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date as an opaque display string
    #[serde(default)]
    pub end_date: Option<String>,
}

/// An unresolved reference to an external visitor document
///
/// The store never dereferences these; a view adapter resolves them lazily
/// through a [`VisitorResolver`](crate::repository::VisitorResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    /// Reference type tag as written by the document store
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Path of the referenced document
    pub reference_path: String,
}

/// A visitor entry: either a plain traveler name or an external reference
///
/// The wire format is untagged: a JSON string is a name, a JSON object is a
/// reference. Only plain names participate in visitor predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisitorRef {
    /// Traveler identified by display name
    Name(String),
    /// Opaque reference into the document store
    External(ExternalRef),
}

impl VisitorRef {
    /// The plain name, if this entry is one
    pub fn name(&self) -> Option<&str> {
        match self {
            VisitorRef::Name(name) => Some(name),
            VisitorRef::External(_) => None,
        }
    }
}

/// Visitor tags, description, and dates attached to a trip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripData {
    /// Single-visitor tag (legacy records carry only this)
    #[serde(default)]
    pub visitor: Option<String>,
    /// Ordered visitor list; may mix names and external references
    #[serde(default)]
    pub visitors: Vec<VisitorRef>,
    /// Free-text trip description
    #[serde(default)]
    pub description: Option<String>,
    /// Trip dates
    #[serde(default)]
    pub date: Option<TripDate>,
}

/// One logged trip
///
/// `id` is assigned by the repository and is the only required field.
/// The trip payload is stored under the wire field `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    /// Opaque unique identifier
    pub id: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Cover image URL
    #[serde(default)]
    pub image_url: String,
    /// Where the trip happened
    #[serde(default)]
    pub location: Option<Location>,
    /// Visitor and date metadata
    #[serde(default, rename = "data")]
    pub trip: Option<TripData>,
}

impl TripRecord {
    /// Country name, if the record has a non-empty one
    ///
    /// Records without a country are excluded from country-based aggregates.
    pub fn country(&self) -> Option<&str> {
        self.location
            .as_ref()
            .map(|loc| loc.country.as_str())
            .filter(|c| !c.is_empty())
    }

    /// Trip year, if present
    pub fn year(&self) -> Option<i32> {
        self.trip.as_ref()?.date.as_ref()?.year
    }

    /// Whether the given traveler is tagged on this record
    ///
    /// True iff the singular `visitor` tag equals `name`, or `name` appears
    /// as a plain entry in the `visitors` list. External references never
    /// match; a record with no tags at all matches no one.
    pub fn has_visitor(&self, name: &str) -> bool {
        let Some(trip) = self.trip.as_ref() else {
            return false;
        };
        if trip.visitor.as_deref() == Some(name) {
            return true;
        }
        trip.visitors.iter().any(|v| v.name() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with_visitors(visitor: Option<&str>, visitors: Vec<VisitorRef>) -> TripRecord {
        TripRecord {
            id: "r".to_string(),
            trip: Some(TripData {
                visitor: visitor.map(String::from),
                visitors,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_has_visitor_singular_tag() {
        let record = record_with_visitors(Some("Lara"), vec![]);
        assert!(record.has_visitor("Lara"));
        assert!(!record.has_visitor("Álvaro"));
    }

    #[test]
    fn test_has_visitor_list_membership() {
        let record = record_with_visitors(
            None,
            vec![
                VisitorRef::Name("Lara".to_string()),
                VisitorRef::Name("Álvaro".to_string()),
            ],
        );
        assert!(record.has_visitor("Lara"));
        assert!(record.has_visitor("Álvaro"));
    }

    #[test]
    fn test_external_refs_never_match() {
        let record = record_with_visitors(
            None,
            vec![VisitorRef::External(ExternalRef {
                kind: "documentReference/1.0".to_string(),
                reference_path: "visitors/Lara".to_string(),
            })],
        );
        assert!(!record.has_visitor("Lara"));
    }

    #[test]
    fn test_untagged_visitor_list_decodes_mixed_entries() {
        let trip: TripData = serde_json::from_value(json!({
            "visitors": [
                "Lara",
                { "type": "documentReference/1.0", "referencePath": "visitors/abc" }
            ]
        }))
        .unwrap();
        assert_eq!(trip.visitors.len(), 2);
        assert_eq!(trip.visitors[0].name(), Some("Lara"));
        assert_eq!(trip.visitors[1].name(), None);
    }

    #[test]
    fn test_record_without_trip_data_matches_no_one() {
        let record = TripRecord {
            id: "r".to_string(),
            ..Default::default()
        };
        assert!(!record.has_visitor("Lara"));
        assert_eq!(record.year(), None);
        assert_eq!(record.country(), None);
    }

    #[test]
    fn test_empty_country_string_excluded() {
        let record = TripRecord {
            id: "r".to_string(),
            location: Some(Location {
                lat: 0.0,
                lon: 0.0,
                country: String::new(),
                state: String::new(),
            }),
            ..Default::default()
        };
        assert_eq!(record.country(), None);
    }

    #[test]
    fn test_decode_tolerates_missing_optional_fields() {
        let record: TripRecord =
            serde_json::from_value(json!({ "id": "t1" })).expect("minimal record decodes");
        assert_eq!(record.id, "t1");
        assert!(record.title.is_empty());
        assert!(record.location.is_none());
        assert!(record.trip.is_none());
    }
}
