// tests/common/helpers.rs
//! Test helper functions for driving the router in-process.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use file_processing::{ServerConfig, build_state, create_router};
use file_processing_shared_kernel::FileSize;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router wired exactly as in production, with the default upload limit.
#[allow(dead_code)]
pub fn app() -> Router {
    app_with_limit(ServerConfig::default().max_upload)
}

#[allow(dead_code)]
pub fn app_with_limit(max_upload: FileSize) -> Router {
    let config = ServerConfig {
        max_upload,
        ..ServerConfig::default()
    };
    create_router(build_state(&config))
}

/// Sends one request and decodes the JSON body.
///
/// # Panics
///
/// Panics if the router fails or the body is not JSON.
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", String::from_utf8_lossy(&bytes)));
    (status, json)
}
