use serde::{Deserialize, Serialize};

/// One entry of the loaded catalog. Built once at artifact load time and
/// immutable afterwards; `row_index` is the entry's position in the
/// similarity matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub row_index: usize,
}

/// A `(row_index, score)` pair produced while ranking one similarity row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub row_index: usize,
    pub score: f32,
}

/// Display metadata assembled for one recommended movie.
///
/// Missing data is represented explicitly: an empty `poster_url` suffix or
/// `overview`, and a `null` trailer. Fields are never omitted from the JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayRecord {
    pub title: String,
    pub poster_url: String,
    pub overview: String,
    pub trailer_url: Option<String>,
}

// ============================================================================
// API request/response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub movie_title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub movie_title: String,
    pub recommendations: Vec<DisplayRecord>,
    /// Items dropped under the skip policy; always present, empty when
    /// nothing was skipped
    pub skipped: Vec<SkippedRecommendation>,
}

/// A recommendation that could not be enriched, with the reason it failed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedRecommendation {
    pub title: String,
    pub reason: String,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response from TMDB `/search/movie`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbSearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResult {
    pub id: u64,
    pub title: String,
}

/// Raw response from TMDB `/movie/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Raw response from TMDB `/movie/{id}/videos`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideosResponse {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    pub key: String,
    #[serde(rename = "type")]
    pub video_type: String,
}
