//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use snapshare_api::{AppState, build_router};
use snapshare_core::config::AppConfig;
use snapshare_core::types::id::UserId;
use snapshare_database::StorageBackend;
use snapshare_database::repositories::{MemoryDirectory, MemoryNotificationStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared application state
    pub state: AppState,
    /// Backing notification records
    pub store: Arc<MemoryNotificationStore>,
    /// Profiles, event titles, and followers
    pub directory: Arc<MemoryDirectory>,
}

impl TestApp {
    /// Create a new memory-backed test application
    pub fn new() -> Self {
        let store = Arc::new(MemoryNotificationStore::new());
        let directory = Arc::new(MemoryDirectory::new());
        let backend = StorageBackend::in_memory(store.clone(), directory.clone());
        let state = AppState::new(AppConfig::default(), &backend);

        Self {
            router: build_router(state.clone()),
            state,
            store,
            directory,
        }
    }

    /// Send a request and return status plus parsed JSON body
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        user: Option<UserId>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("x-user-id", user.to_string());
        }
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Wait until `user` has at least `n` stored notifications
    pub async fn wait_for_records(&self, user: UserId, n: usize) -> Value {
        for _ in 0..100 {
            let (_, body) = self
                .request("GET", "/api/notifications", Some(user), None)
                .await;
            if body["data"].as_array().map_or(0, Vec::len) >= n {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for {n} notifications");
    }
}
