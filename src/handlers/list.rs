use crate::error::{ApiError, ErrorResponse};
use crate::models::ListResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET / handler - List all item names
///
/// Returns every object key currently present in the store. Ordering is
/// store-defined and not guaranteed.
#[utoipa::path(
    get,
    path = routes::ITEM_LIST,
    responses(
        (status = 200, description = "All item names", body = ListResponse),
        (status = 502, description = "Object store error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let items = state.store.list().await?;

    tracing::info!("Listed {} items", items.len());
    Ok((StatusCode::OK, Json(ListResponse { items })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::MemoryStore;
    use axum::{body::Body, http::Request, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let config = Config {
            store_root: "/unused-in-tests".into(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        crate::routes::router(AppState {
            store: Arc::new(MemoryStore::new()),
            config: Arc::new(config),
        })
    }

    async fn list_items(app: Router) -> Vec<String> {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: ListResponse = serde_json::from_slice(&body).unwrap();
        response_json.items
    }

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let app = setup_test_app();
        assert_eq!(list_items(app).await, Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_list_endpoint_after_posts() {
        let app = setup_test_app();

        for name in ["alpha", "beta"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(format!("/{name}"))
                        .body(Body::from("content"))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let mut items = list_items(app).await;
        items.sort();
        assert_eq!(items, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[tokio::test]
    async fn test_list_endpoint_after_delete() {
        let app = setup_test_app();

        let post_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/alpha")
                    .body(Body::from("content"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(post_response.status(), StatusCode::OK);

        let delete_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/alpha")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete_response.status(), StatusCode::OK);

        assert_eq!(list_items(app).await, Vec::<String>::new());
    }
}
