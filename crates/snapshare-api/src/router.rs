//! Route definitions for the SnapShare notification API.
//!
//! Notification routes are mounted under `/api`; the WebSocket upgrade and
//! health check sit at the root.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(notification_routes())
        .merge(action_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server);

    Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(handlers::ws::ws_upgrade))
        .route("/health", get(handlers::health::health))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Listing, read and delete endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications)
                .delete(handlers::notification::delete_notifications),
        )
        .route(
            "/notifications/grouped",
            get(handlers::notification::list_grouped),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read",
            post(handlers::notification::mark_read),
        )
        .route(
            "/notifications/groups/read",
            post(handlers::notification::mark_group_read),
        )
        .route(
            "/notifications/groups/delete",
            post(handlers::notification::delete_group),
        )
}

/// Domain action intake
fn action_routes() -> Router<AppState> {
    Router::new().route("/actions", post(handlers::action::submit_action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use snapshare_core::config::AppConfig;
    use snapshare_core::types::id::{EventId, UserId};
    use snapshare_database::StorageBackend;
    use snapshare_database::repositories::{MemoryDirectory, MemoryNotificationStore};

    fn app() -> (Router, Arc<MemoryDirectory>) {
        let directory = Arc::new(MemoryDirectory::new());
        let backend = StorageBackend::in_memory(
            Arc::new(MemoryNotificationStore::new()),
            directory.clone(),
        );
        (
            build_router(AppState::new(AppConfig::default(), &backend)),
            directory,
        )
    }

    async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, user: Option<UserId>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(user) = user {
            builder = builder.header("x-user-id", user.to_string());
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_listing_requires_caller() {
        let (app, _) = app();
        let req = Request::get("/api/notifications").body(Body::empty()).unwrap();
        let (status, body) = call(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_action_then_grouped_listing_and_group_read() {
        let (app, directory) = app();
        let (author, event) = (UserId::new(), EventId::new());
        directory.add_event(event, Some("Beach Day"));

        for name in ["Uma", "Bo", "Cy"] {
            let action = json!({
                "action": "event_liked",
                "actor": { "kind": "guest", "name": name },
                "event_id": event,
                "author_id": author,
            });
            let (status, body) = call(&app, json_request("POST", "/api/actions", None, action)).await;
            assert_eq!(status, StatusCode::ACCEPTED);
            assert!(body["data"]["action_id"].is_string());
        }

        // Listener work runs on spawned tasks.
        let mut groups = Value::Null;
        for _ in 0..50 {
            let req = Request::get("/api/notifications/grouped")
                .header("x-user-id", author.to_string())
                .body(Body::empty())
                .unwrap();
            let (_, body) = call(&app, req).await;
            if body["data"][0]["count"] == 3 {
                groups = body;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(groups["data"].as_array().map(Vec::len), Some(1));
        let key = groups["data"][0]["key"].clone();

        let (status, body) = call(
            &app,
            json_request("POST", "/api/notifications/groups/read", Some(author), json!({ "key": key })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["affected"], 3);

        let req = Request::get("/api/notifications/unread-count")
            .header("x-user-id", author.to_string())
            .body(Body::empty())
            .unwrap();
        let (_, body) = call(&app, req).await;
        assert_eq!(body["data"]["count"], 0);
    }

    #[tokio::test]
    async fn test_empty_id_list_is_rejected() {
        let (app, _) = app();
        let (status, body) = call(
            &app,
            json_request("DELETE", "/api/notifications", Some(UserId::new()), json!({ "ids": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_health_reports_memory_store() {
        let (app, _) = app();
        let (status, body) = call(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["database"], "memory");
        assert_eq!(body["data"]["ws_connections"], 0);
    }
}
