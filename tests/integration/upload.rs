// tests/integration/upload.rs
use axum::http::StatusCode;
use serde_json::json;

use crate::common::{MultipartBuilder, app, send, upload_file_request, upload_request};

#[tokio::test]
async fn upload_counts_lines_and_words() {
    let app = app();
    let (status, body) = send(&app, upload_file_request("test.txt", b"Hello world\nThis is a test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "File processed successfully");
    assert_eq!(body["data"]["filename"], "test.txt");
    assert_eq!(body["data"]["results"], json!({"line_count": 2, "word_count": 6}));
    assert!(body["data"]["record_id"].is_string());
}

#[tokio::test]
async fn csv_uploads_are_accepted_case_insensitively() {
    let (status, body) = send(&app(), upload_file_request("DATA.CSV", b"a,b\n1,2\n")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["results"]["line_count"], 2);
}

#[tokio::test]
async fn disallowed_extension_is_bad_request() {
    let (status, body) = send(&app(), upload_file_request("test.jpg", b"content")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Wrong file type! Only .txt, .csv files are permitted.");
}

#[tokio::test]
async fn missing_file_part_is_bad_request() {
    let body = MultipartBuilder::new().text("note", "no file here").finish();
    let (status, body) = send(&app(), upload_request(body, true)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"status": "error", "message": "No file uploaded"}));
}

#[tokio::test]
async fn non_multipart_request_is_bad_request() {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/upload")
        .header("content-type", "text/plain")
        .body(axum::body::Body::from("just text"))
        .unwrap();
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No file uploaded");
}

#[tokio::test]
async fn empty_file_is_bad_request() {
    let (status, body) = send(&app(), upload_file_request("empty.txt", b"")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "File is empty");
}

#[tokio::test]
async fn invalid_utf8_is_bad_request() {
    let (status, body) = send(&app(), upload_file_request("binary.txt", &[0xff, 0xfe, 0xfd])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "File content is not valid UTF-8 text");
}

#[tokio::test]
async fn filename_path_components_are_removed() {
    let (status, body) = send(&app(), upload_file_request("../../etc/notes.txt", b"x")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["filename"], "notes.txt");
}

#[tokio::test]
async fn extra_parts_are_ignored() {
    let body = MultipartBuilder::new()
        .text("comment", "ignored")
        .file("file", "test.txt", b"one two three")
        .finish();
    let (status, body) = send(&app(), upload_request(body, true)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["results"]["word_count"], 3);
}

#[tokio::test]
async fn empty_filename_is_bad_request() {
    let (status, body) = send(&app(), upload_file_request("", b"content")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"status": "error", "message": "Filename empty"}));
}
