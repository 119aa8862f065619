//! Typed client for the search backend.
//!
//! One method per endpoint, one outbound call per user action. Calls are
//! independent of each other: no retries, no cancellation, no shared state
//! beyond the connection pool. The details path is the only place a failure
//! is swallowed, and it substitutes the local fallback record so a caller
//! never has to handle an error mid-render.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{MatineeError, Result};
use crate::fallback::failed_movie_more_info;
use crate::models::{Movie, MovieMoreInfo, SearchResponse};
use crate::request::{payload_request, request_helper};

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server_url.clone())
    }

    /// Searches the backend for titles matching `query`.
    ///
    /// Empty or whitespace-only input is a no-op, not an error: the search
    /// screen clears to zero results without a network call.
    pub async fn search_title(&self, query: &str) -> Result<Vec<Movie>> {
        let query = query.trim();
        if query.is_empty() {
            debug!("empty query, skipping search");
            return Ok(Vec::new());
        }

        let envelope = request_helper(query);
        let url = format!("{}/search/title", self.base_url);
        info!(query, %url, "searching titles");

        let response = envelope.apply(self.client.post(&url)).send().await?;
        if !response.status().is_success() {
            return Err(MatineeError::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(count = parsed.search.len(), "search returned results");
        Ok(parsed.search)
    }

    /// Fetches the extended record for a title by imdbID. Fallible variant;
    /// most callers want [`ApiClient::more_info`].
    pub async fn fetch_more_info(&self, imdb_id: &str) -> Result<MovieMoreInfo> {
        let envelope = request_helper(imdb_id);
        let url = format!("{}/movie/more_info", self.base_url);
        info!(imdb_id, %url, "fetching more info");

        let response = envelope.apply(self.client.post(&url)).send().await?;
        if !response.status().is_success() {
            return Err(MatineeError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Details lookup for a tile the user selected. Never fails: any lookup
    /// error is logged and replaced with the locally synthesized record, so
    /// the popup always has something to show. A failed lookup is visually
    /// identical to a real all-`"N/a"` record apart from the plot notice.
    pub async fn more_info(&self, movie: &Movie) -> MovieMoreInfo {
        match self.fetch_more_info(&movie.imdb_id).await {
            Ok(info) => info,
            Err(err) => {
                warn!(imdb_id = %movie.imdb_id, %err, "more-info lookup failed, using placeholder");
                failed_movie_more_info(movie)
            }
        }
    }

    /// Adds a title to the watch-list and returns the server's JSON
    /// acknowledgement.
    pub async fn add_to_watch_list(&self, info: &MovieMoreInfo) -> Result<Value> {
        let envelope = payload_request(info)?;
        let url = format!("{}/watch_list/add", self.base_url);
        info!(imdb_id = %info.imdb_id, %url, "adding to watch-list");

        let response = envelope.apply(self.client.post(&url)).send().await?;
        if !response.status().is_success() {
            return Err(MatineeError::Status(response.status()));
        }

        let body = response.text().await?;
        let ack: Value = serde_json::from_str(&body)?;
        debug!(%ack, "watch-list add acknowledged");
        Ok(ack)
    }
}
