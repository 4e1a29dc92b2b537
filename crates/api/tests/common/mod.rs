#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use eventfinder_api::config::{ServerConfig, StoreBackend, StoreConfig};
use eventfinder_api::router::build_app_router;
use eventfinder_api::state::AppState;
use eventfinder_core::types::Item;
use eventfinder_core::zip_code::ZipCode;
use eventfinder_db::{EventRepo, EventStore, InMemoryEventStore, StoreError};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreConfig {
            backend: StoreBackend::Memory,
            table_name: "Events".to_string(),
            region: "us-west-2".to_string(),
            endpoint_url: None,
        },
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn EventStore>) -> Router {
    let config = test_config();
    let state = AppState {
        event_repo: EventRepo::new(store),
    };
    build_app_router(state, &config)
}

/// Router over a fresh, empty in-memory store.
pub fn build_memory_app() -> (Router, Arc<InMemoryEventStore>) {
    let store = Arc::new(InMemoryEventStore::new());
    (build_test_app(store.clone()), store)
}

/// Store double that counts calls and optionally fails every one of them.
#[derive(Default)]
pub struct RecordingStore {
    pub fail: bool,
    pub queries: AtomicUsize,
    pub writes: AtomicUsize,
    inner: InMemoryEventStore,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventStore for RecordingStore {
    async fn query_by_zip_code(&self, zip: &ZipCode) -> Result<Vec<Item>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Query("ProvisionedThroughputExceededException".into()));
        }
        self.inner.query_by_zip_code(zip).await
    }

    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Write("AccessDeniedException".into()));
        }
        self.inner.put_item(item).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        Ok(())
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
