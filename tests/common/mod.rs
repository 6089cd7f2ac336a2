#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use urlnk::domain::repositories::UrlRepository;
use urlnk::infrastructure::persistence::InMemoryUrlRepository;
use urlnk::routes::build_router;
use urlnk::state::AppState;
use urlnk::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "http://localhost:8000";

pub fn create_test_state(repository: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(repository, CodeGenerator::default(), BASE_URL)
}

pub fn create_test_app() -> Router {
    let repository = Arc::new(InMemoryUrlRepository::new());
    build_router(create_test_state(repository), 30)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).unwrap()
}

/// Creates a short URL through the API and returns the response body.
pub async fn create_url(server: &TestServer, long_url: &str) -> Value {
    let response = server
        .post("/api/urls")
        .json(&json!({ "long_url": long_url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
