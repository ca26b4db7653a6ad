/// Metadata provider abstraction
///
/// Enrichment needs three read-only lookups per title: search by name,
/// details by provider ID, and the video list by provider ID. Keeping them
/// behind one trait lets route tests swap the real TMDB client for a stub.
use crate::{
    error::AppResult,
    models::{TmdbMovieDetails, TmdbSearchResult, TmdbVideo},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search for movies by title (provider-side fuzzy matching)
    async fn search_movie(&self, title: &str) -> AppResult<Vec<TmdbSearchResult>>;

    /// Fetch display details for one movie by its provider ID
    async fn movie_details(&self, movie_id: u64) -> AppResult<TmdbMovieDetails>;

    /// Fetch the video list for one movie by its provider ID
    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<TmdbVideo>>;
}
