//! Integration tests for the search and details flows
//!
//! These cover the request/response pipeline end to end without a live
//! backend: envelope construction, canned-response decoding, and the
//! fallback substitution that kicks in when the transport fails.

use pretty_assertions::assert_eq;

use matinee::fallback::failed_movie_more_info;
use matinee::models::{Movie, SearchResponse};
use matinee::request::request_helper;
use matinee::{ApiClient, MatineeError};

/// Backend search response for the query "batman", as captured from the
/// wire.
const BATMAN_RESPONSE: &str = r#"{"Search":[{"Title":"Batman","imdbID":"tt0096895","Year":"1989","Poster":"N/A","Type":"movie"}]}"#;

// ============================================================================
// Search pipeline
// ============================================================================

#[test]
fn search_request_body_is_exactly_the_wrapped_query() {
    let envelope = request_helper("batman");
    let body: serde_json::Value = serde_json::from_str(&envelope.body).unwrap();
    assert_eq!(body, serde_json::json!({ "title": "batman" }));
}

#[test]
fn canned_batman_response_yields_one_no_poster_record() {
    let response: SearchResponse = serde_json::from_str(BATMAN_RESPONSE).unwrap();
    assert_eq!(response.search.len(), 1);

    let movie = &response.search[0];
    assert_eq!(movie.title, "Batman");
    assert_eq!(movie.imdb_id, "tt0096895");
    // Poster is the "N/A" sentinel, so the tile takes the no-poster path.
    assert!(!movie.has_poster());
}

#[tokio::test]
async fn empty_query_is_a_no_op() {
    // Nothing listens here; the call only passes if no request is made.
    let client = ApiClient::new("http://127.0.0.1:9");
    assert!(client.search_title("").await.unwrap().is_empty());
    assert!(client.search_title(" \t ").await.unwrap().is_empty());
}

// ============================================================================
// Details fallback on transport failure
// ============================================================================

fn grid_movie() -> Movie {
    Movie {
        title: "X".into(),
        year: "1999".into(),
        imdb_id: "tt123".into(),
        media_type: "movie".into(),
        poster: "N/A".into(),
    }
}

#[tokio::test]
async fn transport_failure_surfaces_as_error_from_fallible_fetch() {
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.fetch_more_info("tt123").await.unwrap_err();
    assert!(matches!(err, MatineeError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn details_lookup_substitutes_fallback_on_transport_failure() {
    let client = ApiClient::new("http://127.0.0.1:9");
    let info = client.more_info(&grid_movie()).await;

    assert_eq!(
        info.plot,
        "Oops, it looks like there was an error retrieving more info about the movie, X."
    );
    assert_eq!(info.imdb_id, "tt123");
    assert_eq!(info.ratings.len(), 2);
}

#[tokio::test]
async fn fallback_details_match_local_shaping_exactly() {
    // A failed lookup and the local shaper must be indistinguishable; the
    // popup renders both the same way.
    let client = ApiClient::new("http://127.0.0.1:9");
    let movie = grid_movie();
    assert_eq!(client.more_info(&movie).await, failed_movie_more_info(&movie));
}
