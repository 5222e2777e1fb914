//! HTTP-backed record repository
//!
//! Reads the record collection from a JSON endpoint
//! (`{base_url}/{collection}`). The endpoint returns the full collection as
//! a JSON array; there is no pagination because the working set is a
//! personal travel log, not a feed.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info};

use super::decode::decode_collection;
use super::RecordRepository;
use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::types::TripRecord;

/// Repository reading a JSON document collection over HTTP
pub struct HttpRepository {
    client: reqwest::Client,
    url: String,
}

impl HttpRepository {
    /// Create a repository for the configured source endpoint
    pub fn new(source: &SourceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!(
                "{}/{}",
                source.base_url.trim_end_matches('/'),
                source.collection
            ),
        }
    }

    /// Create a repository with an existing client (shared connection pool)
    pub fn with_client(client: reqwest::Client, source: &SourceConfig) -> Self {
        Self {
            client,
            url: format!(
                "{}/{}",
                source.base_url.trim_end_matches('/'),
                source.collection
            ),
        }
    }
}

#[async_trait]
impl RecordRepository for HttpRepository {
    async fn fetch_all(&self) -> Result<Vec<TripRecord>, FetchError> {
        debug!(url = %self.url, "Fetching record collection");

        let response = self.client.get(&self.url).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED
            || response.status() == StatusCode::FORBIDDEN
        {
            return Err(FetchError::Unauthorized(format!(
                "document store returned {}",
                response.status()
            )));
        }

        let payload = response.error_for_status()?.json().await?;
        let records = decode_collection(payload)?;

        info!(count = records.len(), "Record collection fetched");
        Ok(records)
    }
}
