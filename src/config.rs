use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL that poster paths are appended to
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// TMDB locale parameter sent with every provider call
    #[serde(default = "default_language")]
    pub language: String,

    /// Path to the precomputed recommender artifact (titles + similarity matrix)
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,

    /// How many recommendations to produce per request
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// When true, enrichment failures skip the affected item instead of
    /// failing the whole response
    #[serde(default)]
    pub partial_results: bool,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_artifact_path() -> String {
    "movie_recommender_model.json".to_string()
}

fn default_recommendation_count() -> usize {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
