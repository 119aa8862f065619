//! Runtime configuration, read from the environment at startup.
//!
//! The backend URL and aggregator hosts have development defaults; the
//! RapidAPI key does not and must be supplied externally. Nothing here is
//! ever committed to source.

use std::env;

use crate::error::{MatineeError, Result};

const DEFAULT_SERVER_URL: &str = "http://localhost:4000";
const DEFAULT_MOVIEDB_HOST: &str = "movie-database-alternative.p.rapidapi.com";
const DEFAULT_STREAMING_HOST: &str = "utelly-tv-shows-and-movies-availability-v1.p.rapidapi.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search backend.
    pub server_url: String,
    /// Host of the third-party movie-database aggregator.
    pub moviedb_host: String,
    /// Host of the streaming-availability aggregator.
    pub streaming_host: String,
    /// RapidAPI key for both aggregators. Optional: backend-only use works
    /// without it, aggregator construction fails cleanly when it is absent.
    pub rapidapi_key: Option<String>,
}

impl Config {
    /// Reads configuration from the environment. `dotenvy` is expected to
    /// have been loaded by the caller before this runs.
    pub fn from_env() -> Self {
        Self {
            server_url: env::var("MATINEE_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
            moviedb_host: env::var("MATINEE_MOVIEDB_HOST")
                .unwrap_or_else(|_| DEFAULT_MOVIEDB_HOST.to_string()),
            streaming_host: env::var("MATINEE_STREAMING_HOST")
                .unwrap_or_else(|_| DEFAULT_STREAMING_HOST.to_string()),
            rapidapi_key: env::var("MATINEE_RAPIDAPI_KEY").ok(),
        }
    }

    /// The RapidAPI key, or a configuration error naming the missing
    /// variable.
    pub fn rapidapi_key(&self) -> Result<&str> {
        self.rapidapi_key
            .as_deref()
            .ok_or_else(|| MatineeError::Config("MATINEE_RAPIDAPI_KEY is not set".to_string()))
    }
}
