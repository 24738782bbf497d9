use axum::{
    body::Body,
    extract::Path,
    http::{header, Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use swagger_errors::{ErrorEntry, ErrorResponse, ErrorSource};
use tower::Service;

async fn get_item(Path(id): Path<String>) -> Result<Json<Value>, ErrorResponse> {
    match id.as_str() {
        "known" => Ok(Json(json!({ "id": "known" }))),
        "bad" => Err(ErrorResponse::bad_request().append_entries([ErrorEntry::new(
            1001,
            "Invalid identifier",
            "id must be numeric",
        )
        .with_source(ErrorSource::path("id"))])),
        "crash" => Err(ErrorResponse::unknown_error("database connection reset")),
        "limited" => Err(ErrorResponse::too_many_requests()),
        _ => Err(ErrorResponse::not_found()
            .append_entries([ErrorEntry::new(404, "Item not found", format!("No item {}", id))])),
    }
}

async fn validate() -> Result<Json<Value>, ErrorResponse> {
    Err(ErrorResponse::unprocessable_entity().append_entries([
        ErrorEntry::new(1, "Missing field", "name is required").with_source(ErrorSource::body("/name")),
        ErrorEntry::new(2, "Missing header", "X-Tenant is required").with_source(ErrorSource::header("X-Tenant")),
        ErrorEntry::new(3, "Out of range", "limit must be <= 100").with_source(ErrorSource::query("limit")),
    ]))
}

// Helper to create test app
fn create_test_app() -> Router {
    Router::new()
        .route("/items/:id", get(get_item))
        .route("/validate", get(validate))
        .route("/metrics", get(swagger_errors::metrics::metrics_handler))
}

// Helper to send request and return status, content type and raw body
async fn send_request(app: &mut Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn test_success_passes_through() {
    let mut app = create_test_app();
    let (status, _, body) = send_request(&mut app, "/items/known").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], "known");
}

#[tokio::test]
async fn test_not_found_envelope() {
    let mut app = create_test_app();
    let (status, content_type, body) = send_request(&mut app, "/items/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        json!({
            "errors": [
                { "code": "404", "title": "Item not found", "detail": "No item missing" }
            ]
        })
    );
}

#[tokio::test]
async fn test_bad_request_with_path_source() {
    let mut app = create_test_app();
    let (status, _, body) = send_request(&mut app, "/items/bad").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["errors"][0]["code"], "1001");
    assert_eq!(json["errors"][0]["source"], json!({ "key": "path", "value": "id" }));
}

#[tokio::test]
async fn test_unknown_error_is_internal_server_error() {
    let mut app = create_test_app();
    let (status, _, body) = send_request(&mut app, "/items/crash").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["errors"][0]["code"], "0");
    assert_eq!(json["errors"][0]["title"], "Unknown error");
    assert_eq!(json["errors"][0]["detail"], "database connection reset");
}

#[tokio::test]
async fn test_error_without_entries_has_empty_body() {
    let mut app = create_test_app();
    let (status, content_type, body) = send_request(&mut app, "/items/limited").await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(content_type.is_none());
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_entries_keep_insertion_order() {
    let mut app = create_test_app();
    let (status, _, body) = send_request(&mut app, "/validate").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body).unwrap();
    let keys: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["source"]["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["body", "header", "query"]);
}

#[tokio::test]
async fn test_metrics_count_error_responses() {
    let mut app = create_test_app();
    let _ = send_request(&mut app, "/items/missing").await;
    let (status, _, body) = send_request(&mut app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("error_responses_total"));
    assert!(text.contains("status=\"404\""));
}
