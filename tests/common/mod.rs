#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase};
use serde_json::Value;
use tower::ServiceExt;

use media_space::api::create_router;
use media_space::config::Config;
use media_space::infra::{Database, UserStore};
use media_space::services::UserManager;
use media_space::AppState;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn test_database() -> Arc<Database> {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };

    Arc::new(
        Database::connect(&config)
            .await
            .expect("in-memory database should open and migrate"),
    )
}

/// User service backed by a fresh SQLite store
pub async fn test_service() -> UserManager {
    let db = test_database().await;
    UserManager::new(Arc::new(UserStore::new(db.get_connection())))
}

/// Repository over a `users` table created by hand without the unique
/// username index, as found in databases that predate the migration.
pub async fn unindexed_store() -> UserStore {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let conn = SeaDatabase::connect(options)
        .await
        .expect("in-memory database should open");

    conn.execute_unprepared(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username VARCHAR(64) NOT NULL,
            password VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .await
    .expect("users table should be created");

    UserStore::new(conn)
}

/// Router wired exactly as `serve` wires it, on a fresh SQLite store
pub async fn test_app() -> Router {
    create_router(AppState::from_database(test_database().await))
}

/// Send one request through the router and decode the JSON body (Null if empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request should build"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, json)
}
