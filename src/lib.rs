//! Core of a movie-search front-end: wire-shaped records, request-envelope
//! construction, a typed client for the search backend, third-party
//! aggregator lookups, and the local fallback shaping used when a lookup
//! fails. Rendering and navigation belong to whatever shell sits on top;
//! everything here is plain data in, data out.

pub mod aggregator;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod request;

pub use client::ApiClient;
pub use config::Config;
pub use error::{MatineeError, Result};
