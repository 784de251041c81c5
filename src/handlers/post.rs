use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::validate_name;
use axum::{body::Bytes, extract::Path, extract::State, http::StatusCode, Json};

/// POST /:name handler - Create or overwrite an item
///
/// The request body is stored verbatim as the item's content; no schema is
/// imposed on it. The stored content is echoed back as a JSON string.
#[utoipa::path(
    post,
    path = routes::ITEM,
    params(
        ("name" = String, Path, description = "Item name")
    ),
    request_body(content = String, description = "Item content, stored verbatim"),
    responses(
        (status = 200, description = "Item stored; content echoed as a JSON string", body = String),
        (status = 400, description = "Invalid item name", body = ErrorResponse),
        (status = 502, description = "Object store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn post_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<String>), ApiError> {
    validate_name(&name).map_err(|_| ApiError::InvalidItemName(name.clone()))?;

    state.store.write(&name, &body).await?;

    tracing::info!("Successfully stored item: {} ({} bytes)", name, body.len());
    Ok((
        StatusCode::OK,
        Json(String::from_utf8_lossy(&body).into_owned()),
    ))
}
