mod common;

use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, SameSite};
use blog_api::application::services::{AuthService, CookiePolicy};
use chrono::Duration;
use serde_json::{Value, json};

#[tokio::test]
async fn test_issue_token_sets_cookie() {
    let server = common::make_server();

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "a@x.com", "name": "Alice" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true }));

    let cookie = response.cookie("token");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
}

#[tokio::test]
async fn test_matching_email_can_list_own_posts() {
    let server = common::make_server();
    common::create_post(&server, common::sample_post("Mine", "tech", "a@x.com")).await;
    common::create_post(&server, common::sample_post("Theirs", "tech", "b@x.com")).await;

    let login = server.post("/jwt").json(&json!({ "email": "a@x.com" })).await;
    let cookie = login.cookie("token");

    let response = server.get("/blog/a@x.com").add_cookie(cookie).await;

    response.assert_status_ok();
    let posts = response.json::<Vec<Value>>();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Mine");
    assert_eq!(posts[0]["owner"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_other_email_is_forbidden() {
    let server = common::make_server();

    let login = server.post("/jwt").json(&json!({ "email": "a@x.com" })).await;
    let cookie = login.cookie("token");

    let response = server.get("/blog/b@x.com").add_cookie(cookie).await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["message"], "forbidden token");
}

#[tokio::test]
async fn test_token_without_email_is_forbidden() {
    let server = common::make_server();

    let login = server.post("/jwt").json(&json!({ "uid": 42 })).await;
    login.assert_status_ok();

    let response = server
        .get("/blog/a@x.com")
        .add_cookie(login.cookie("token"))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_string_email_is_forbidden() {
    let server = common::make_server();

    let login = server.post("/jwt").json(&json!({ "email": 5 })).await;
    login.assert_status_ok();

    let response = server
        .get("/blog/5")
        .add_cookie(login.cookie("token"))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["code"], "forbidden");
}

#[tokio::test]
async fn test_login_with_non_object_body_is_bad_request() {
    let server = common::make_server();

    let response = server.post("/jwt").json(&json!("a@x.com")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "invalid_argument");
}

#[tokio::test]
async fn test_missing_cookie_is_unauthenticated() {
    let server = common::make_server();

    let response = server.get("/blog/a@x.com").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "unauthorised token");
}

#[tokio::test]
async fn test_garbage_cookie_is_unauthenticated() {
    let server = common::make_server();

    let response = server
        .get("/blog/a@x.com")
        .add_cookie(Cookie::new("token", "not.a.jwt"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_foreign_key_is_unauthenticated() {
    let server = common::make_server();
    let foreign = AuthService::new("other-secret", Duration::days(1), CookiePolicy::new(false));
    let mut payload = serde_json::Map::new();
    payload.insert("email".to_string(), json!("a@x.com"));
    let token = foreign.issue(payload).unwrap();

    let response = server
        .get("/blog/a@x.com")
        .add_cookie(Cookie::new("token", token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthenticated() {
    let server = common::make_server();
    let expired = AuthService::new(
        common::TEST_SECRET,
        Duration::seconds(-60),
        CookiePolicy::new(false),
    );
    let mut payload = serde_json::Map::new();
    payload.insert("email".to_string(), json!("a@x.com"));
    let token = expired.issue(payload).unwrap();

    let response = server
        .get("/blog/a@x.com")
        .add_cookie(Cookie::new("token", token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = common::make_server();

    let response = server.get("/logout").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true }));

    let cookie = response.cookie("token");
    assert_eq!(cookie.value(), "");
    assert!(cookie.max_age().is_some_and(|age| age.is_zero()));
}

#[tokio::test]
async fn test_protected_route_after_logout_is_unauthenticated() {
    let server = common::make_server();

    let login = server.post("/jwt").json(&json!({ "email": "a@x.com" })).await;
    server
        .get("/blog/a@x.com")
        .add_cookie(login.cookie("token"))
        .await
        .assert_status_ok();

    let logout = server
        .get("/logout")
        .add_cookie(login.cookie("token"))
        .await;
    let cleared = logout.cookie("token");

    let response = server.get("/blog/a@x.com").add_cookie(cleared).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
