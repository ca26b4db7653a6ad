use crate::{
    error::{AppError, AppResult},
    models::{DisplayRecord, RecommendationResponse, SkippedRecommendation},
    services::{providers::MetadataProvider, recommendations},
    state::AppState,
};

const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed";

/// What to do when enriching a single recommendation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Fail the whole response on the first per-item error
    Abort,
    /// Drop the failed item, annotate it in `skipped`, and keep going.
    /// The request still fails if every candidate fails.
    Skip,
}

/// Assembles a display record for one title via the three-step provider
/// lookup: search, then details and videos by the first candidate's ID.
pub async fn enrich(
    provider: &dyn MetadataProvider,
    title: &str,
    image_base_url: &str,
) -> AppResult<DisplayRecord> {
    let candidate = provider
        .search_movie(title)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::DetailsNotFound(title.to_string()))?;

    let details = provider.movie_details(candidate.id).await?;
    let videos = provider.movie_videos(candidate.id).await?;

    let trailer_url = videos
        .iter()
        .find(|video| video.video_type == "Trailer")
        .map(|video| format!("{}/{}", YOUTUBE_EMBED_URL, video.key));

    // A missing poster path yields the bare image base URL
    Ok(DisplayRecord {
        title: details.title,
        poster_url: format!("{}{}", image_base_url, details.poster_path.unwrap_or_default()),
        overview: details.overview.unwrap_or_default(),
        trailer_url,
    })
}

/// Builds the full recommendation response for one query title.
///
/// Candidates are enriched sequentially in rank order; each enrichment is a
/// tagged per-item outcome routed through the configured [`FailureMode`].
pub async fn build_response(
    state: &AppState,
    movie_title: &str,
) -> AppResult<RecommendationResponse> {
    let candidates =
        recommendations::recommend(&state.catalog, movie_title, state.recommendation_count)?;

    let mut enriched = Vec::with_capacity(candidates.len());
    let mut skipped = Vec::new();
    let mut last_error = None;

    for entry in &candidates {
        match enrich(state.provider.as_ref(), &entry.title, &state.image_base_url).await {
            Ok(record) => enriched.push(record),
            Err(error) => match state.failure_mode {
                FailureMode::Abort => return Err(error),
                FailureMode::Skip => {
                    tracing::warn!(
                        title = %entry.title,
                        error = %error,
                        "Skipping recommendation after enrichment failure"
                    );
                    skipped.push(SkippedRecommendation {
                        title: entry.title.clone(),
                        reason: error.to_string(),
                    });
                    last_error = Some(error);
                }
            },
        }
    }

    // Total lookup failure for the candidate set still fails the request
    if enriched.is_empty() {
        if let Some(error) = last_error {
            return Err(error);
        }
    }

    tracing::info!(
        query = %movie_title,
        recommendations = enriched.len(),
        skipped = skipped.len(),
        "Recommendation response assembled"
    );

    Ok(RecommendationResponse {
        movie_title: movie_title.to_string(),
        recommendations: enriched,
        skipped,
    })
}
