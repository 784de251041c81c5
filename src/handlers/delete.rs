use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::validate_name;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /:name handler - Permanently remove an item
///
/// Deleting an absent item is a deterministic 404, never a crash, so repeated
/// deletes of the same name behave identically.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteResponse),
        (status = 400, description = "Invalid item name", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 502, description = "Object store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    validate_name(&name).map_err(|_| ApiError::InvalidItemName(name.clone()))?;

    if state.store.delete(&name).await? {
        tracing::info!("Successfully deleted item: {}", name);
        Ok((
            StatusCode::OK,
            Json(DeleteResponse {
                message: format!("Successfully deleted item {name}"),
            }),
        ))
    } else {
        tracing::info!("Item not found on delete: {}", name);
        Err(ApiError::ItemNotFound(name))
    }
}
