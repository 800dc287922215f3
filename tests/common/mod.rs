#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use ouvidoria::models::{AppConfig, AppState};
use rusqlite::Connection;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A router wired to its own SQLite file, removed on drop.
pub struct TestApp {
    pub router: Router,
    pub db_path: PathBuf,
}

impl TestApp {
    pub fn new() -> Self {
        let db_path = std::env::temp_dir().join(format!(
            "ouvidoria-test-{}-{}.db",
            std::process::id(),
            NEXT_DB.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = std::fs::remove_file(&db_path);

        let config = AppConfig::default().with_database_path(db_path.to_string_lossy());
        let state = AppState::initialize(&config).expect("failed to initialize test database");
        let router = ouvidoria::router(state, &config);

        Self { router, db_path }
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, value)
    }

    pub fn count_rows(&self, table: &str) -> i64 {
        let conn = Connection::open(&self.db_path).unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .unwrap()
    }

    pub fn count_null_timestamps(&self, table: &str) -> i64 {
        let conn = Connection::open(&self.db_path).unwrap();
        conn.query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE data IS NULL"),
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    /// Drop a table behind the router's back to force storage failures.
    pub fn drop_table(&self, table: &str) {
        let conn = Connection::open(&self.db_path).unwrap();
        conn.execute(&format!("DROP TABLE {table}"), []).unwrap();
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut path = self.db_path.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}
