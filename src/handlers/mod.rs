pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod post;

use axum::http::Method;

use crate::error::ApiError;

pub use delete::delete_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use post::post_handler;

/// Rejection for POST/DELETE against the root path, which carries no item name
pub async fn item_name_missing() -> ApiError {
    ApiError::ItemNameMissing
}

/// Rejection for any method outside the GET/POST/DELETE contract
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::UnsupportedMethod(method.to_string())
}
