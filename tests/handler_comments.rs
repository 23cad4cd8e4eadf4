mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_create_comment_returns_insert_ack() {
    let server = common::make_server();
    let post_id = common::create_post(&server, common::sample_post("Hi", "tech", "a@x.com")).await;

    let response = server
        .post("/comments")
        .json(&json!({
            "blogId": post_id,
            "comment": "Nice post",
            "user": { "email": "b@x.com", "name": "Bob" }
        }))
        .await;

    response.assert_status_ok();
    let ack = response.json::<Value>();
    assert_eq!(ack["acknowledged"], true);
    assert!(ack["insertedId"].is_string());
}

#[tokio::test]
async fn test_each_comment_gets_its_own_id() {
    let server = common::make_server();

    let first = server
        .post("/comments")
        .json(&json!({ "comment": "one" }))
        .await
        .json::<Value>();
    let second = server
        .post("/comments")
        .json(&json!({ "comment": "one" }))
        .await
        .json::<Value>();

    assert_ne!(first["insertedId"], second["insertedId"]);
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let server = common::make_server();

    let response = server.post("/comments").json(&json!(["not", "an", "object"])).await;

    assert!(response.status_code().is_client_error());
}
