use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{DeleteResponse, ListResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "item-store API",
        version = "1.0.0",
        description = "A minimal HTTP item store backed by a durable object store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::post::post_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            ListResponse,
            DeleteResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item store operations")
    )
)]
pub struct ApiDoc;
