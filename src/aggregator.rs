//! Clients for the third-party RapidAPI aggregators the app queries
//! directly: title search against the movie-database aggregator, and
//! where-to-stream lookups against the availability aggregator.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{MatineeError, Result};
use crate::fallback::no_streaming_sites;
use crate::models::{Movie, SearchResponse, StreamWebsite};

/// Results-per-page threshold past which the aggregator's second page is
/// worth fetching.
const SECOND_PAGE_THRESHOLD: u64 = 11;

/// Title search against the movie-database aggregator.
pub struct MovieDbClient {
    client: Client,
    host: String,
    api_key: String,
}

impl MovieDbClient {
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            host: host.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(&config.moviedb_host, config.rapidapi_key()?))
    }

    /// Searches by title. Fetches page 1, and when the aggregator reports
    /// more matches than one grid screen holds, appends page 2.
    pub async fn search(&self, title: &str) -> Result<Vec<Movie>> {
        let first = self.search_page(title, 1).await?;
        let total = first.total_results();
        let mut movies = first.search;

        if total > SECOND_PAGE_THRESHOLD {
            debug!(
                total = total,
                "fetching second aggregator page"
            );
            let second = self.search_page(title, 2).await?;
            movies.extend(second.search);
        }

        Ok(movies)
    }

    async fn search_page(&self, title: &str, page: u32) -> Result<SearchResponse> {
        let url = format!(
            "https://{}/?s={}&page={}&r=json",
            self.host,
            urlencoding::encode(title),
            page
        );
        debug!(%url, "querying movie aggregator");

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Host", self.host.as_str())
            .header("X-RapidAPI-Key", self.api_key.as_str())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MatineeError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    collection: LookupCollection,
}

#[derive(Debug, Deserialize, Default)]
struct LookupCollection {
    #[serde(default)]
    locations: Vec<StreamWebsite>,
}

/// Where-to-stream lookups against the availability aggregator.
pub struct StreamingClient {
    client: Client,
    host: String,
    api_key: String,
}

impl StreamingClient {
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            host: host.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(&config.streaming_host, config.rapidapi_key()?))
    }

    /// Streaming sites for a title. Never fails: a lookup error or an empty
    /// answer both yield the "Not Found" placeholder list.
    pub async fn streaming_sites(&self, imdb_id: &str) -> Vec<StreamWebsite> {
        match self.lookup(imdb_id).await {
            Ok(sites) if !sites.is_empty() => sites,
            Ok(_) => {
                debug!(imdb_id, "no streaming sites listed");
                no_streaming_sites(imdb_id)
            }
            Err(err) => {
                warn!(imdb_id, %err, "streaming lookup failed, using placeholder");
                no_streaming_sites(imdb_id)
            }
        }
    }

    async fn lookup(&self, imdb_id: &str) -> Result<Vec<StreamWebsite>> {
        let url = format!(
            "https://{}/idlookup?source_id={}&source=imdb&country=us",
            self.host,
            urlencoding::encode(imdb_id)
        );
        debug!(%url, "querying streaming aggregator");

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Host", self.host.as_str())
            .header("X-RapidAPI-Key", self.api_key.as_str())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MatineeError::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: LookupResponse = serde_json::from_str(&body)?;
        Ok(parsed.collection.locations)
    }
}
