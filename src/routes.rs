// Route path constants - single source of truth for all API paths

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    delete_handler, get_handler, health_handler, item_name_missing, list_handler,
    method_not_allowed, post_handler,
};
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const ITEM_LIST: &str = "/";
pub const ITEM: &str = "/{name}";

/// Build the service router
///
/// The root path is reserved for listing: POST and DELETE against it carry no
/// item name and are rejected, and any method outside the GET/POST/DELETE
/// contract falls through to the unsupported-method response instead of
/// axum's default 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(health_handler))
        .route(
            ITEM_LIST,
            get(list_handler)
                .post(item_name_missing)
                .delete(item_name_missing)
                .fallback(method_not_allowed),
        )
        .route(
            ITEM,
            get(get_handler)
                .post(post_handler)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
