use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version() {
    let server = TestContext::new().server();

    let body: Value = server.get("/version").await.json();

    assert_eq!(body["service"], "bookdesk-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
