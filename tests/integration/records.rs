// tests/integration/records.rs
use axum::http::StatusCode;
use serde_json::json;

use crate::common::{app, get_request, send, upload_file_request};

#[tokio::test]
async fn uploaded_record_can_be_retrieved() {
    let app = app();
    let (_, upload) = send(&app, upload_file_request("test.txt", b"Test")).await;
    let record_id = upload["data"]["record_id"].as_str().expect("record id").to_string();

    let (status, body) = send(&app, get_request(&format!("/records/{record_id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["id"], record_id.as_str());
    assert_eq!(body["data"]["filename"], "test.txt");
    assert_eq!(body["data"]["line_count"], 1);
    assert_eq!(body["data"]["word_count"], 1);
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_record_is_not_found() {
    let (status, body) = send(&app(), get_request("/records/nonexistent")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"status": "error", "message": "Record not found"}));
}

#[tokio::test]
async fn undecodable_record_id_is_not_found() {
    let (status, body) = send(&app(), get_request("/records/%FF")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"status": "error", "message": "Record not found"}));
}

#[tokio::test]
async fn records_are_not_shared_between_apps() {
    let first = app();
    let (_, upload) = send(&first, upload_file_request("a.txt", b"a")).await;
    let record_id = upload["data"]["record_id"].as_str().unwrap().to_string();

    let (status, _) = send(&app(), get_request(&format!("/records/{record_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_uploads_get_distinct_retrievable_ids() {
    let app = app();

    let uploads: Vec<_> = (0..16)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let content = format!("line {i}\nsecond line");
                let (status, body) = send(&app, upload_file_request("c.txt", content.as_bytes())).await;
                assert_eq!(status, StatusCode::OK);
                body["data"]["record_id"].as_str().unwrap().to_string()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for upload in uploads {
        ids.push(upload.await.expect("upload task"));
    }

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());

    for id in &ids {
        let (status, body) = send(&app, get_request(&format!("/records/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["line_count"], 2);
        assert_eq!(body["data"]["word_count"], 4);
    }
}
