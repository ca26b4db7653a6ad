use std::sync::Arc;

use crate::{
    catalog::Catalog,
    config::Config,
    services::{enrichment::FailureMode, providers::MetadataProvider},
};

/// Shared application state
///
/// Built once at startup and read-only for the process lifetime. The catalog
/// and provider are shared across concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub provider: Arc<dyn MetadataProvider>,
    pub image_base_url: String,
    pub recommendation_count: usize,
    pub failure_mode: FailureMode,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, provider: Arc<dyn MetadataProvider>, config: &Config) -> Self {
        let failure_mode = if config.partial_results {
            FailureMode::Skip
        } else {
            FailureMode::Abort
        };

        Self {
            catalog,
            provider,
            image_base_url: config.image_base_url.clone(),
            recommendation_count: config.recommendation_count,
            failure_mode,
        }
    }
}
