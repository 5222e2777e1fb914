//! Error types for the trip record store

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// General error
    #[error("{0}")]
    General(String),
}

/// Errors reaching or reading the remote document store
///
/// A failed fetch never crosses the store's public read surface as a panic
/// or a thrown error: the store records it as a displayable string and
/// leaves the marker set untouched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure talking to the document store
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The document store rejected the credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A fetched document does not match the minimal record shape
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors decoding a fetched document into a [`TripRecord`]
///
/// Only structural problems are errors here. Absent optional fields are a
/// legitimate record state and decode cleanly.
///
/// [`TripRecord`]: crate::types::TripRecord
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The document payload is not a JSON object
    #[error("Document is not an object: {0}")]
    NotAnObject(String),

    /// The document has no usable id
    #[error("Document missing id")]
    MissingId,

    /// A present field has the wrong shape
    #[error("Malformed document {id}: {source}")]
    Malformed {
        /// Id of the offending document
        id: String,
        /// Underlying deserialization failure
        source: serde_json::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
