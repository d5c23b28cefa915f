//! Shared test fixtures
//!
//! Spins up the full application over a throwaway SQLite database and a
//! temporary static directory, served in-process with `axum_test`.

use std::fs;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use authgate::server::config::AppConfig;
use authgate::server::create_app;

/// Secret the test server signs tokens with.
pub const TEST_SECRET: &str = "test-secret";

/// A running test application.
///
/// Holds the temp directory so the database and static files outlive
/// the server.
pub struct TestApp {
    pub server: TestServer,
    _dir: TempDir,
}

/// Build the app against a fresh database and start an in-process server.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let static_dir = dir.path().join("public");
    fs::create_dir_all(&static_dir).expect("Failed to create static dir");
    fs::write(
        static_dir.join("index.html"),
        "<!doctype html><title>authgate</title>",
    )
    .expect("Failed to write index.html");

    let config = AppConfig {
        database_url: format!("sqlite://{}/test.db", dir.path().display()),
        jwt_secret: TEST_SECRET.to_string(),
        port: 0,
        static_dir,
        token_ttl: Duration::from_secs(3600),
    };

    let app = create_app(&config).await.expect("Failed to create app");
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp { server, _dir: dir }
}

/// Sign up a user, asserting success.
pub async fn signup(app: &TestApp, email: &str, password: &str) {
    let response = app
        .server
        .post("/signup")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201);
}

/// Log in and return the access token.
pub async fn login(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code().as_u16(), 200);

    let body: serde_json::Value = response.json();
    body["access_token"]
        .as_str()
        .expect("access_token missing")
        .to_string()
}

/// Format a bearer Authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
