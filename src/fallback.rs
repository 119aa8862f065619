//! Locally synthesized stand-ins for data a remote lookup failed to produce.
//!
//! These shapers are the error-recovery path itself, so they are total: any
//! input yields a fully populated record with the `"N/a"` sentinel in every
//! slot that cannot be derived from what we already had.

use crate::models::{CountryEntry, Movie, MovieMoreInfo, Rating, StreamWebsite};

/// Sentinel for a field with no known value.
const NA: &str = "N/a";

/// Builds the details record shown when the more-info lookup fails.
///
/// Everything knowable from the grid record carries over; the plot becomes a
/// human-readable notice naming the title, and the ratings list holds two
/// placeholder entries so the ratings panel keeps its layout.
pub fn failed_movie_more_info(found: &Movie) -> MovieMoreInfo {
    MovieMoreInfo {
        title: found.title.clone(),
        year: found.year.clone(),
        rated: NA.to_string(),
        released: found.year.clone(),
        runtime: NA.to_string(),
        genre: NA.to_string(),
        director: NA.to_string(),
        writer: NA.to_string(),
        actors: NA.to_string(),
        plot: format!(
            "Oops, it looks like there was an error retrieving more info about the {}, {}.",
            found.media_type, found.title
        ),
        language: NA.to_string(),
        country: NA.to_string(),
        awards: NA.to_string(),
        poster: found.poster.clone(),
        ratings: vec![
            Rating {
                source: NA.to_string(),
                value: NA.to_string(),
            },
            Rating {
                source: NA.to_string(),
                value: NA.to_string(),
            },
        ],
        metascore: NA.to_string(),
        imdb_rating: NA.to_string(),
        imdb_votes: NA.to_string(),
        imdb_id: found.imdb_id.clone(),
        media_type: found.media_type.clone(),
        dvd: NA.to_string(),
        box_office: NA.to_string(),
        production: NA.to_string(),
        website: NA.to_string(),
        response: NA.to_string(),
    }
}

/// Default streaming-sites list when the availability lookup returns nothing.
pub fn no_streaming_sites(imdb_id: &str) -> Vec<StreamWebsite> {
    vec![StreamWebsite {
        id: imdb_id.to_string(),
        icon: String::new(),
        name: "Not Found".to_string(),
        url: String::new(),
        display_name: "n/a".to_string(),
        country: vec![CountryEntry {
            item_number: 0,
            location: String::new(),
        }],
    }]
}

/// Single placeholder rating entry.
pub fn bad_ratings() -> Vec<Rating> {
    vec![Rating {
        source: NA.to_string(),
        value: NA.to_string(),
    }]
}
