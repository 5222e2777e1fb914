//! Document decoding for the record collection
//!
//! The document store owns the record schema; this layer only rejects
//! documents that are structurally unusable (non-object payload, missing
//! id, or a present field with the wrong shape). Absent optional fields are
//! a legitimate record state and decode to their defaults, matching how the
//! aggregation engine treats them: not counted, never an error.

use serde_json::Value;
use tracing::warn;

use crate::error::DecodeError;
use crate::types::TripRecord;

/// Decode a whole fetched collection
///
/// Expects a JSON array of record documents. Fails on the first
/// structurally invalid document; a collection read is all-or-nothing so
/// the store never ingests a partial set.
pub fn decode_collection(payload: Value) -> Result<Vec<TripRecord>, DecodeError> {
    let Value::Array(documents) = payload else {
        return Err(DecodeError::NotAnObject(summarize(&payload)));
    };

    documents.into_iter().map(decode_document).collect()
}

/// Decode a single record document
pub fn decode_document(document: Value) -> Result<TripRecord, DecodeError> {
    let Value::Object(ref fields) = document else {
        return Err(DecodeError::NotAnObject(summarize(&document)));
    };

    let id = fields
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or(DecodeError::MissingId)?
        .to_string();

    serde_json::from_value(document.clone()).map_err(|source| {
        warn!(id = %id, error = %source, "Malformed record document");
        DecodeError::Malformed { id, source }
    })
}

fn summarize(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
