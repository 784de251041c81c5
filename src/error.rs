use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure kind to its HTTP status and a JSON error body. Store
/// failures deliberately return a generic message: the underlying error chain
/// is logged server-side and never echoed to callers.
#[derive(Debug)]
pub enum ApiError {
    /// POST or DELETE against the root path, where no item name exists
    ItemNameMissing,
    /// Item name that cannot address an object (path separators, dot segments)
    InvalidItemName(String),
    /// HTTP method outside the GET/POST/DELETE contract
    UnsupportedMethod(String),
    /// No object stored under the requested name
    ItemNotFound(String),
    /// Object store operation failed
    StoreFailure(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::ItemNameMissing => {
                (StatusCode::BAD_REQUEST, "Item name missing".to_string())
            }
            ApiError::InvalidItemName(name) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid item name: {name}"),
            ),
            ApiError::UnsupportedMethod(method) => (
                StatusCode::BAD_REQUEST,
                format!("We only accept GET, POST, and DELETE, not {method}"),
            ),
            ApiError::ItemNotFound(name) => {
                (StatusCode::NOT_FOUND, format!("Item not found: {name}"))
            }
            ApiError::StoreFailure(err) => {
                tracing::error!("Object store failure: {err:#}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Object store operation failed".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreFailure(err)
    }
}
