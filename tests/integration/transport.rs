// tests/integration/transport.rs
use axum::http::StatusCode;
use file_processing_shared_kernel::FileSize;
use serde_json::json;

use crate::common::{MultipartBuilder, app, app_with_limit, get_request, send, upload_file_request, upload_request};

#[tokio::test]
async fn health_check_reports_service() {
    let (status, body) = send(&app(), get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "service": "file-processing"}));
}

#[tokio::test]
async fn unknown_route_is_endpoint_not_found() {
    let (status, body) = send(&app(), get_request("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Endpoint not found"}));
}

#[tokio::test]
async fn oversized_upload_is_rejected_by_declared_length() {
    let content = vec![b'a'; 1024 * 1024 + 1];
    let (status, body) = send(&app(), upload_file_request("big.txt", &content)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, json!({"error": "File is too large. Maximum size is 1MB."}));
}

#[tokio::test]
async fn oversized_upload_is_rejected_while_streaming() {
    let content = vec![b'a'; 1024 * 1024 + 1];
    let body = MultipartBuilder::new().file("file", "big.txt", &content).finish();
    let (status, body) = send(&app(), upload_request(body, false)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File is too large. Maximum size is 1MB.");
}

#[tokio::test]
async fn upload_limit_follows_configuration() {
    let app = app_with_limit(FileSize::new(1024));
    let content = vec![b'w'; 2048];
    let (status, body) = send(&app, upload_file_request("big.txt", &content)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File is too large. Maximum size is 1KB.");

    let (status, _) = send(&app, upload_file_request("small.txt", b"fits")).await;
    assert_eq!(status, StatusCode::OK);
}
