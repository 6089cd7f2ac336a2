mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;
use urlnk::infrastructure::persistence::InMemoryUrlRepository;
use urlnk::routes::app_router;

#[tokio::test]
async fn test_create_short_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/urls")
        .json(&json!({ "long_url": "https://www.example.com/" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let short_code = body["short_code"].as_str().unwrap();

    assert!(body["id"].is_i64());
    assert_eq!(short_code.len(), 6);
    assert!(short_code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["long_url"], "https://www.example.com/");
    assert_eq!(body["click_count"], 0);
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::BASE_URL, short_code)
    );
}

#[tokio::test]
async fn test_create_short_url_bad_input() {
    let server = common::create_test_server();

    let response = server
        .post("/api/urls")
        .json(&json!({ "long_url": "not-a-valid-url" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_create_short_url_unsupported_scheme() {
    let server = common::create_test_server();

    let response = server
        .post("/api/urls")
        .json(&json!({ "long_url": "ftp://files.example.com/archive.zip" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_short_url_missing_field() {
    let server = common::create_test_server();

    let response = server.post("/api/urls").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_short_url_truncated_body() {
    let server = common::create_test_server();

    let response = server
        .post("/api/urls")
        .bytes(r#"{"long_url": "https://www.example.com/""#.into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_create_short_url_wrong_type() {
    let server = common::create_test_server();

    let response = server
        .post("/api/urls")
        .json(&json!({ "long_url": 5 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_read_url_by_non_numeric_id() {
    let server = common::create_test_server();

    let response = server.get("/api/urls/not-a-number").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_read_url_by_impossible_code() {
    let server = common::create_test_server();

    let response = server.get("/api/urls/shortcode/way-too-long-code").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "URL with short code 'way-too-long-code' not found."
    );
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let state = common::create_test_state(Arc::new(InMemoryUrlRepository::new()));

    let response = app_router(state.clone(), 30)
        .oneshot(Request::get("/api/urls/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app_router(state, 30)
        .oneshot(
            Request::post("/api/urls/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"long_url": "https://www.example.com/"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_read_all_urls_empty() {
    let server = common::create_test_server();

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_read_all_urls() {
    let server = common::create_test_server();
    let first = common::create_url(&server, "https://www.example1.com/").await;
    let second = common::create_url(&server, "https://www.example2.com/").await;

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 2);

    let long_urls: Vec<&str> = body
        .iter()
        .map(|u| u["long_url"].as_str().unwrap())
        .collect();
    assert!(long_urls.contains(&"https://www.example1.com/"));
    assert!(long_urls.contains(&"https://www.example2.com/"));
    assert_ne!(first["short_code"], second["short_code"]);
}

#[tokio::test]
async fn test_created_codes_are_unique() {
    let server = common::create_test_server();

    let mut codes = HashSet::new();
    for i in 0..50 {
        let body = common::create_url(&server, &format!("https://example.com/{i}")).await;
        codes.insert(body["short_code"].as_str().unwrap().to_string());
    }

    assert_eq!(codes.len(), 50);
}

#[tokio::test]
async fn test_read_url_by_id() {
    let server = common::create_test_server();
    let created = common::create_url(&server, "https://www.read-by-id.com/").await;
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/urls/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["long_url"], "https://www.read-by-id.com/");
}

#[tokio::test]
async fn test_read_url_by_id_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/urls/999999").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("not found")
    );
}

#[tokio::test]
async fn test_read_url_by_short_code() {
    let server = common::create_test_server();
    let created = common::create_url(&server, "https://www.short-code-test.com/").await;
    let short_code = created["short_code"].as_str().unwrap();

    let response = server
        .get(&format!("/api/urls/shortcode/{short_code}"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["short_code"], short_code);
    assert_eq!(body["long_url"], "https://www.short-code-test.com/");
}

#[tokio::test]
async fn test_read_url_by_short_code_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/urls/shortcode/ZZZZZZ").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "URL with short code 'ZZZZZZ' not found."
    );
}

#[tokio::test]
async fn test_update_url_by_id() {
    let server = common::create_test_server();
    let created = common::create_url(&server, "https://www.original.com").await;
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/urls/{id}"))
        .json(&json!({ "long_url": "https://www.updated.com/" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["short_code"], created["short_code"]);
    assert_eq!(body["created_at"], created["created_at"]);
    assert_eq!(body["long_url"], "https://www.updated.com/");
}

#[tokio::test]
async fn test_update_url_by_id_not_found() {
    let server = common::create_test_server();

    let response = server
        .put("/api/urls/999999")
        .json(&json!({ "long_url": "https://www.wont-work.com" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_url_bad_input() {
    let server = common::create_test_server();
    let created = common::create_url(&server, "https://www.example.com/").await;
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/urls/{id}"))
        .json(&json!({ "long_url": "nope" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_url_by_id() {
    let server = common::create_test_server();
    let created = common::create_url(&server, "https://www.delete-this.com").await;
    let id = created["id"].as_i64().unwrap();
    let short_code = created["short_code"].as_str().unwrap();

    server
        .delete(&format!("/api/urls/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/urls/{id}"))
        .await
        .assert_status_not_found();
    server
        .get(&format!("/api/urls/shortcode/{short_code}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_url_by_id_not_found() {
    let server = common::create_test_server();

    let response = server.delete("/api/urls/999999").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let server = common::create_test_server();
    let first = common::create_url(&server, "https://first.example/").await;
    let first_id = first["id"].as_i64().unwrap();

    server
        .delete(&format!("/api/urls/{first_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let second = common::create_url(&server, "https://second.example/").await;
    assert!(second["id"].as_i64().unwrap() > first_id);
}
