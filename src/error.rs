use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Query title is not in the loaded catalog
    #[error("Movie '{0}' not found in the database.")]
    NotFound(String),

    /// The metadata provider has no matching record for a recommended title
    #[error("Movie details not found for '{0}'")]
    DetailsNotFound(String),

    /// The metadata provider was reachable but returned an error
    #[error("Metadata provider error: {0}")]
    Provider(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(_) | AppError::DetailsNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Provider(_) | AppError::HttpClient(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "detail": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
