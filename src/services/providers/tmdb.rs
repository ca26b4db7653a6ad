/// TMDB API provider
///
/// API Flow per enriched title:
/// 1. Search: /search/movie → candidate list, first hit wins
/// 2. Details: /movie/{id} → title, poster path, overview
/// 3. Videos: /movie/{id}/videos → trailer candidates
///
/// Every call carries the API key and locale as query parameters. The
/// provider is treated as untrusted: non-2xx responses surface as provider
/// errors with the returned body attached.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{
        TmdbMovieDetails, TmdbSearchResponse, TmdbSearchResult, TmdbVideo, TmdbVideosResponse,
    },
    services::providers::MetadataProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, language: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            language,
        }
    }

    async fn get(&self, url: &str, extra: &[(&str, &str)]) -> AppResult<reqwest::Response> {
        let mut query = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ];
        query.extend_from_slice(extra);

        let response = self.http_client.get(url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn search_movie(&self, title: &str) -> AppResult<Vec<TmdbSearchResult>> {
        let url = format!("{}/search/movie", self.api_url);
        let response = self.get(&url, &[("query", title)]).await?;

        let search: TmdbSearchResponse = response.json().await?;

        tracing::debug!(
            query = %title,
            results = search.results.len(),
            provider = "tmdb",
            "Movie search completed"
        );

        Ok(search.results)
    }

    async fn movie_details(&self, movie_id: u64) -> AppResult<TmdbMovieDetails> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);
        let response = self.get(&url, &[]).await?;

        let details: TmdbMovieDetails = response.json().await?;
        Ok(details)
    }

    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<TmdbVideo>> {
        let url = format!("{}/movie/{}/videos", self.api_url, movie_id);
        let response = self.get(&url, &[]).await?;

        let videos: TmdbVideosResponse = response.json().await?;
        Ok(videos.results)
    }
}
