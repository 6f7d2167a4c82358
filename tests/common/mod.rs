#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use bookings::config::Config;
use bookings::db::{
    DocumentQuery, DocumentStore, MemoryDocumentStore, PgDocumentStore, StoreError,
};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<dyn DocumentStore>,
    pub config: Config,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body, return (body, status).
    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a path, return (body, status).
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create a user, return the user JSON.
    pub async fn add_user(&self, name: &str, email: &str) -> Value {
        let (body, status) = self
            .post_json("/AddUser", &json!({ "name": name, "email": email }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "add user failed: {body}");
        body
    }

    /// Create an appointment with the default duration, return its JSON.
    pub async fn add_appointment(&self, user_id: &str, client_name: &str, start: &str) -> Value {
        let (body, status) = self
            .post_json(
                "/AddAppointment",
                &json!({ "user_id": user_id, "client_name": client_name, "start_time": start }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "add appointment failed: {body}");
        body
    }
}

/// Spawn a test app backed by an in-memory document store.
pub async fn spawn_app() -> TestApp {
    spawn_with_store(Arc::new(MemoryDocumentStore::new()), Config::in_memory()).await
}

/// Spawn a test app whose store fails every operation.
pub async fn spawn_failing_app() -> TestApp {
    spawn_with_store(Arc::new(FailingStore), Config::in_memory()).await
}

pub async fn spawn_with_store(store: Arc<dyn DocumentStore>, config: Config) -> TestApp {
    let app = bookings::build_app(store.clone(), config.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        store,
        config,
        client: Client::new(),
    }
}

/// Store that rejects everything, for exercising the 500 paths.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create(&self, _: &str, _: &str, _: &Value) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn query(&self, _: &str, _: &DocumentQuery) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// A PostgreSQL-backed store in a fresh temporary database.
pub struct TestDatabase {
    pub store: PgDocumentStore,
    pub db_name: String,
    admin_url: String,
}

/// Create a fresh test database, or `None` when `DATABASE_URL` is not set.
pub async fn spawn_database() -> Option<TestDatabase> {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").ok()?;

    let db_name = format!("bookings_test_{}", Uuid::new_v4().simple());

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    Some(TestDatabase {
        store: PgDocumentStore::new(pool),
        db_name,
        admin_url,
    })
}

/// Spawn a test app on top of a fresh PostgreSQL database.
pub async fn spawn_pg_app() -> Option<(TestApp, TestDatabase)> {
    let db = spawn_database().await?;
    let app = spawn_with_store(Arc::new(db.store.clone()), Config::in_memory()).await;
    Some((app, db))
}

/// Drop the test database.
pub async fn cleanup(db: TestDatabase) {
    db.store.pool().close().await;

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&db.admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!(
        "DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)",
        db.db_name
    ))
    .execute(&admin_pool)
    .await;

    admin_pool.close().await;
}

pub fn assert_cors(headers: &reqwest::header::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}
