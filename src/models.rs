use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Poster value the backend sends when a title has no artwork.
pub const NO_POSTER: &str = "N/A";

/// Minimal identifying record for a title shown in a search-result grid.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    pub poster: String,
}

impl Movie {
    /// Whether the record carries real artwork. Tiles for records without a
    /// poster render the icon-and-title fallback instead of an image.
    pub fn has_poster(&self) -> bool {
        self.poster != NO_POSTER && !self.poster.is_empty()
    }
}

/// One entry in a title's ratings list, e.g. `{"Source": "Metacritic",
/// "Value": "84/100"}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Extended descriptive record for a title, shown in the details popup.
///
/// Every field is a string; the backend uses the `"N/a"` sentinel for
/// anything it could not fill in. Missing fields decode as empty strings
/// rather than failing the whole record.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct MovieMoreInfo {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub ratings: Vec<Rating>,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "DVD")]
    pub dvd: String,
    pub box_office: String,
    pub production: String,
    pub website: String,
    pub response: String,
}

/// Where a title can be streamed, as reported by the availability aggregator.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StreamWebsite {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub url: String,
    pub display_name: String,
    pub country: Vec<CountryEntry>,
}

/// A single country/availability entry inside a [`StreamWebsite`].
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CountryEntry {
    #[serde(rename = "itemNumber")]
    pub item_number: u32,
    pub location: String,
}

/// Response shape shared by the search backend and the movie aggregator.
///
/// A response without a `Search` field decodes as an empty result list, so a
/// shape mismatch shows up as "no results" downstream rather than an error —
/// the backend does not distinguish the two.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<Movie>,
    /// Total match count. The aggregator reports this as a decimal string;
    /// kept raw here and parsed on demand.
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<Value>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
}

impl SearchResponse {
    /// Numeric view of `totalResults`, tolerating both string and number
    /// encodings. Unparseable or absent counts read as zero.
    pub fn total_results(&self) -> u64 {
        match &self.total_results {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn movie_decodes_from_backend_shape() {
        let json = r#"{"Title":"Batman","imdbID":"tt0096895","Year":"1989","Poster":"N/A","Type":"movie"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Batman");
        assert_eq!(movie.imdb_id, "tt0096895");
        assert_eq!(movie.media_type, "movie");
        assert!(!movie.has_poster());
    }

    #[test]
    fn movie_round_trips_field_names() {
        let movie = Movie {
            title: "Heat".into(),
            year: "1995".into(),
            imdb_id: "tt0113277".into(),
            media_type: "movie".into(),
            poster: "https://example.com/heat.jpg".into(),
        };
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["Title"], "Heat");
        assert_eq!(value["imdbID"], "tt0113277");
        assert_eq!(value["Type"], "movie");
        assert!(movie.has_poster());
    }

    #[test]
    fn more_info_tolerates_partial_records() {
        let json = r#"{"Title":"Heat","imdbID":"tt0113277","Ratings":[{"Source":"Metacritic","Value":"76/100"}]}"#;
        let info: MovieMoreInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title, "Heat");
        assert_eq!(info.ratings.len(), 1);
        assert_eq!(info.plot, "");
    }

    #[test]
    fn search_response_defaults_when_search_field_missing() {
        let response: SearchResponse = serde_json::from_str(r#"{"Response":"False"}"#).unwrap();
        assert!(response.search.is_empty());
        assert_eq!(response.total_results(), 0);
    }

    #[test]
    fn total_results_parses_string_and_number_encodings() {
        let as_string: SearchResponse =
            serde_json::from_str(r#"{"Search":[],"totalResults":"43"}"#).unwrap();
        assert_eq!(as_string.total_results(), 43);

        let as_number: SearchResponse =
            serde_json::from_str(r#"{"Search":[],"totalResults":7}"#).unwrap();
        assert_eq!(as_number.total_results(), 7);

        let garbage: SearchResponse =
            serde_json::from_str(r#"{"Search":[],"totalResults":"many"}"#).unwrap();
        assert_eq!(garbage.total_results(), 0);
    }
}
