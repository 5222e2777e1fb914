//! Record repository: the read-only boundary to the remote document store
//!
//! The store does not know or care about the storage technology behind its
//! records. Everything it needs is the [`RecordRepository`] trait: one
//! fallible, order-irrelevant bulk read. Implementations must not mutate any
//! shared state — ingestion into the store is the sole mutation point.
//!
//! Two implementations ship with the crate:
//!
//! - [`HttpRepository`]: reads a JSON document collection over HTTP
//! - [`InMemoryRepository`]: canned records with optional injected failure,
//!   for tests and offline use
//!
//! # Example
//!
//! ```rust
//! use triplog::repository::{InMemoryRepository, RecordRepository};
//! use triplog::types::TripRecord;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let repo = InMemoryRepository::new(vec![TripRecord {
//!     id: "t1".to_string(),
//!     ..Default::default()
//! }]);
//!
//! let records = repo.fetch_all().await.unwrap();
//! assert_eq!(records.len(), 1);
//! # });
//! ```

mod decode;
mod http;

pub use decode::{decode_collection, decode_document};
pub use http::HttpRepository;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::FetchError;
use crate::types::{ExternalRef, TripRecord};

/// Read-only access to the trip record collection
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fetch every record in the collection
    ///
    /// The result is a finite, order-irrelevant sequence. Field absence in a
    /// document is legitimate; only structurally invalid documents surface
    /// as [`FetchError::Decode`].
    async fn fetch_all(&self) -> Result<Vec<TripRecord>, FetchError>;
}

/// A resolved visitor document
///
/// Produced by [`VisitorResolver`] implementations when a view adapter
/// dereferences an [`ExternalRef`] from a record's visitor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorProfile {
    /// Display name
    pub name: String,
    /// Avatar image URL, if the document has one
    pub avatar_url: Option<String>,
}

/// Lazy resolution of external visitor references
///
/// View adapters call this on demand when rendering a record's visitor list.
/// The aggregation engine never does: filter predicates match plain names
/// only, so an unresolved reference is simply not counted.
#[async_trait]
pub trait VisitorResolver: Send + Sync {
    /// Resolve an external reference into a visitor profile
    async fn resolve(&self, reference: &ExternalRef) -> Result<VisitorProfile, FetchError>;
}

/// Canned in-memory repository
///
/// Serves a fixed record set, or fails once with an injected error message
/// and then serves records on the retry. Mirrors how view-driven retries
/// behave against a flaky network.
pub struct InMemoryRepository {
    records: Vec<TripRecord>,
    fail_next: Mutex<Option<String>>,
}

impl InMemoryRepository {
    /// Create a repository serving the given records
    pub fn new(records: Vec<TripRecord>) -> Self {
        Self {
            records,
            fail_next: Mutex::new(None),
        }
    }

    /// Make the next `fetch_all` call fail with the given message
    pub fn fail_next_fetch(&self, message: impl Into<String>) {
        *self.fail_next.lock() = Some(message.into());
    }
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn fetch_all(&self) -> Result<Vec<TripRecord>, FetchError> {
        if let Some(message) = self.fail_next.lock().take() {
            return Err(FetchError::Unauthorized(message));
        }
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_fetch_returns_records() {
        let repo = InMemoryRepository::new(vec![TripRecord {
            id: "a".to_string(),
            ..Default::default()
        }]);
        let records = repo.fetch_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "a");
    }

    #[tokio::test]
    async fn test_injected_failure_clears_on_retry() {
        let repo = InMemoryRepository::new(vec![]);
        repo.fail_next_fetch("token expired");

        let err = repo.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Unauthorized(_)));

        // Retry succeeds; the failure was one-shot.
        assert!(repo.fetch_all().await.is_ok());
    }
}
