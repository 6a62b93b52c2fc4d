// tests/common/builders.rs
//! Request builders for the HTTP surface.

use axum::{
    body::Body,
    http::{Method, Request, header},
};

pub const BOUNDARY: &str = "----file-processing-test-boundary";

/// Accumulates multipart parts and renders the request body.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

#[allow(dead_code)]
impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, field: &str, filename: &str, content: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(content);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn text(mut self, field: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n").as_bytes(),
        );
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// POST /upload with a multipart body; the length header is optional so the
/// streaming limit can be exercised on its own.
#[allow(dead_code)]
pub fn upload_request(body: Vec<u8>, with_length: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"));
    if with_length {
        builder = builder.header(header::CONTENT_LENGTH, body.len());
    }
    builder.body(Body::from(body)).expect("valid request")
}

#[allow(dead_code)]
pub fn upload_file_request(filename: &str, content: &[u8]) -> Request<Body> {
    upload_request(MultipartBuilder::new().file("file", filename, content).finish(), true)
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("valid request")
}
