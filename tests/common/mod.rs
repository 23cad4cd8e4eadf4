#![allow(dead_code)]

use axum_test::TestServer;
use blog_api::application::services::{AuthService, CookiePolicy};
use blog_api::infrastructure::persistence::Repositories;
use blog_api::routes::app_router;
use blog_api::state::AppState;
use chrono::Duration;
use serde_json::{Value, json};

pub const TEST_SECRET: &str = "test-secret";

pub fn create_test_state() -> AppState {
    let auth_service = AuthService::new(
        TEST_SECRET,
        Duration::days(365),
        CookiePolicy::new(false),
    );
    AppState::new(Repositories::in_memory(), auth_service)
}

/// Full application router over a fresh in-memory store.
pub fn make_server() -> TestServer {
    make_server_with_origins(&[])
}

pub fn make_server_with_origins(origins: &[String]) -> TestServer {
    TestServer::new(app_router(create_test_state(), origins)).unwrap()
}

/// Inserts a post and returns its generated id.
pub async fn create_post(server: &TestServer, post: Value) -> String {
    let response = server.post("/blogs").json(&post).await;
    response.assert_status_ok();
    response.json::<Value>()["insertedId"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn sample_post(title: &str, category: &str, owner: &str) -> Value {
    json!({
        "title": title,
        "category": category,
        "description": format!("About {title}"),
        "owner": { "email": owner, "name": "Author" }
    })
}
