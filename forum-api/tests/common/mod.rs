/// Common test utilities for integration tests
///
/// Each test context gets a fresh in-memory SQLite store with the schema
/// initialized, plus the fully built router driven through `tower::Service`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use forum_api::app::{build_router, AppState};
use forum_store::store::Store;
use sqlx::SqlitePool;
use tower::Service as _;

/// Test context containing the store and the router under test
pub struct TestContext {
    pub store: Store,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context backed by an in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let store = Store::connect_sqlite(":memory:").await?;
        store.init_schema().await;

        let app = build_router(AppState::new(store.clone()));

        Ok(TestContext { store, app })
    }

    /// Raw access to the underlying SQLite pool, for direct assertions
    pub fn pool(&self) -> &SqlitePool {
        match &self.store {
            Store::Sqlite(pool) => pool,
            Store::Postgres(_) => panic!("test context always uses sqlite"),
        }
    }

    /// Sends a POST with a JSON body and returns (status, parsed body)
    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Sends a GET and returns (status, parsed body)
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

/// Registers a user and returns the generated id
pub async fn register_user(ctx: &TestContext, name: &str, password: &str) -> i64 {
    let (status, body) = ctx
        .post_json(
            "/app/register",
            serde_json::json!({ "name": name, "password": password }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["user_id"].as_i64().unwrap()
}

/// Creates a post and returns the generated id
pub async fn create_post(ctx: &TestContext, title: &str, content: &str, author_id: i64) -> i64 {
    let (status, body) = ctx
        .post_json(
            "/app/posts",
            serde_json::json!({ "title": title, "content": content, "author_id": author_id }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create post failed: {body}");
    body["post_id"].as_i64().unwrap()
}
