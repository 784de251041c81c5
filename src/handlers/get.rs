use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::validate_name;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /:name handler - Read an item's content
///
/// The payload is opaque bytes; it is returned as a JSON-encoded string.
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item content as a JSON string", body = String),
        (status = 400, description = "Invalid item name", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 502, description = "Object store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<String>), ApiError> {
    validate_name(&name).map_err(|_| ApiError::InvalidItemName(name.clone()))?;

    match state.store.read(&name).await? {
        Some(payload) => {
            tracing::info!("Successfully read item: {}", name);
            Ok((
                StatusCode::OK,
                Json(String::from_utf8_lossy(&payload).into_owned()),
            ))
        }
        None => {
            tracing::info!("Item not found: {}", name);
            Err(ApiError::ItemNotFound(name))
        }
    }
}
