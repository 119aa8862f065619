//! Request-envelope construction for the search backend.
//!
//! Every backend call sends the same fixed JSON headers and a body that wraps
//! its payload under a single key, so the envelope is built in one place and
//! handed to the HTTP client unchanged. Payloads are not validated here;
//! empty or odd strings pass through as-is.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::error::Result;

/// Headers sent on every backend request.
pub const JSON_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// Cross-origin mode the envelope is sent under. The backend accepts
/// anonymous cross-origin calls only, so there is a single variant; it is
/// carried on the envelope to keep the wire contract explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    #[default]
    NoCors,
}

/// A request descriptor: method, mode, and the raw body payload to wrap.
#[derive(Debug, Clone)]
pub struct PostRequest {
    pub method: String,
    pub mode: RequestMode,
    pub body: String,
}

/// The method/headers/body triple sent to the backend. Constructed fresh per
/// call and never persisted.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    pub method: String,
    pub mode: RequestMode,
    pub headers: [(&'static str, &'static str); 2],
    pub body: String,
}

impl RequestEnvelope {
    /// Applies the envelope's headers and body to an outbound request.
    pub fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        builder.body(self.body.clone())
    }
}

/// Builds the standard POST envelope for a string payload, wrapped under the
/// `"title"` key.
pub fn request_helper(body_data: &str) -> RequestEnvelope {
    debug!(payload = body_data, "building title request");
    RequestEnvelope {
        method: "POST".to_string(),
        mode: RequestMode::NoCors,
        headers: JSON_HEADERS,
        body: json!({ "title": body_data }).to_string(),
    }
}

/// Builds an envelope from a full descriptor, keeping the descriptor's
/// method and mode. The body payload is wrapped under `"title"` like
/// [`request_helper`].
pub fn create_request(request: &PostRequest) -> RequestEnvelope {
    RequestEnvelope {
        method: request.method.clone(),
        mode: request.mode,
        headers: JSON_HEADERS,
        body: json!({ "title": request.body }).to_string(),
    }
}

/// Builds an envelope whose payload is any serializable value, wrapped under
/// `"title"`. Used for calls that ship a whole record, such as watch-list
/// adds.
pub fn payload_request<T: Serialize>(payload: &T) -> Result<RequestEnvelope> {
    let body = serde_json::to_string(&json!({ "title": payload }))?;
    Ok(RequestEnvelope {
        method: "POST".to_string(),
        mode: RequestMode::NoCors,
        headers: JSON_HEADERS,
        body,
    })
}

/// Variant used by the genre browse call: same fixed headers, but the value
/// is wrapped under `"Genre"` instead of `"title"`.
pub fn genre_request(value: &str) -> RequestEnvelope {
    RequestEnvelope {
        method: "POST".to_string(),
        mode: RequestMode::NoCors,
        headers: JSON_HEADERS,
        body: json!({ "Genre": value }).to_string(),
    }
}
