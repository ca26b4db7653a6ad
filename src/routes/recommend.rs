use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{RecommendationRequest, RecommendationResponse},
    services::enrichment,
    state::AppState,
};

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let response = enrichment::build_response(&state, &request.movie_title).await?;
    Ok(Json(response))
}
