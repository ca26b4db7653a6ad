use std::sync::Arc;

use anyhow::Context;
use axum::middleware as axum_middleware;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use cinerec_api::{
    catalog::load_artifact,
    config::Config,
    middleware::{make_span_with_request_id, request_id_middleware},
    routes::create_router,
    services::providers::TmdbProvider,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Artifact load failure is fatal to startup
    let catalog = load_artifact(&config.artifact_path)?;

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.language.clone(),
    );

    let state = AppState::new(Arc::new(catalog), Arc::new(provider), &config);

    // Request IDs are assigned outside the trace layer so its span can see them
    let app = create_router(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
