use axum::{http::StatusCode, response::Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("Price must be between 1 and 30")]
    PriceOutOfRange,
    #[error("Restaurant or Pizza not found")]
    ReferenceNotFound,
    #[error("{0}")]
    CreateFailed(String),
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.to_string() }),
            ),
            ApiError::PriceOutOfRange => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [self.to_string()] }),
            ),
            ApiError::ReferenceNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "errors": [self.to_string()] }),
            ),
            ApiError::CreateFailed(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [message] }),
            ),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
