// src/controller.rs
//! HTTP-facing adapter between requests and [`ProcessingService`].
//!
//! The controller is the only place where an [`ErrorKind`] becomes an HTTP
//! status. Internal error details are logged here and never returned.

use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use file_processing_domain::secure_filename;
use file_processing_shared_kernel::{ErrorKind, FileProcessingError};
use file_processing_usecase::ProcessingService;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::envelope::ApiResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";
pub const RECORD_NOT_FOUND_MESSAGE: &str = "Record not found";

/// The `file` part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub filename: String,
    pub content: Vec<u8>,
}

impl FilePart {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Status code plus envelope, ready to be turned into a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    status: StatusCode,
    body: ApiResponse,
}

impl ApiReply {
    pub fn ok(body: ApiResponse) -> Self {
        Self { status: StatusCode::OK, body }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        let status = match kind {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            body: ApiResponse::error(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ApiResponse {
        &self.body
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct UploadSummary<'a> {
    record_id: &'a str,
    filename: &'a str,
    results: &'a file_processing_domain::TextCounts,
}

pub struct UploadController {
    service: Arc<ProcessingService>,
}

impl UploadController {
    pub fn new(service: Arc<ProcessingService>) -> Self {
        info!("controller initialized");
        Self { service }
    }

    pub fn service(&self) -> &ProcessingService {
        &self.service
    }

    /// Validates the uploaded part and runs it through the service.
    pub fn upload_file(&self, file: Option<FilePart>) -> ApiReply {
        let Some(file) = file else {
            warn!("no file in the request");
            return ApiReply::failure(ErrorKind::InvalidInput, "No file uploaded");
        };

        if file.filename.is_empty() {
            warn!("missing filename");
            return ApiReply::failure(ErrorKind::InvalidInput, "Filename empty");
        }

        if !self.service.is_allowed_file(&file.filename) {
            warn!(filename = %file.filename, "invalid file type");
            return ApiReply::failure(ErrorKind::InvalidInput, self.service.allowed_extensions_message());
        }

        let filename = secure_filename(&file.filename);
        info!(%filename, "processing file");

        if file.content.is_empty() {
            warn!(%filename, "uploaded file is empty");
            return ApiReply::failure(ErrorKind::InvalidInput, "File is empty");
        }

        let outcome = match self.service.process_file_content(&file.content, filename.as_str()) {
            Ok(outcome) => outcome,
            Err(err) => return reply_for_error(&err, "file upload"),
        };

        let summary = UploadSummary {
            record_id: outcome.record_id.as_str(),
            filename: outcome.filename.as_str(),
            results: &outcome.results,
        };
        match ApiResponse::success_with(&summary, Some("File processed successfully")) {
            Ok(body) => {
                info!(record_id = %outcome.record_id, "file upload completed");
                ApiReply::ok(body)
            }
            Err(err) => reply_for_error(&err, "file upload"),
        }
    }

    pub fn get_processing_record(&self, record_id: &str) -> ApiReply {
        let record = match self.service.get_record_by_id(record_id) {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!(record_id, "record not found");
                return ApiReply::failure(ErrorKind::NotFound, RECORD_NOT_FOUND_MESSAGE);
            }
            Err(err) => return reply_for_error(&err, "record lookup"),
        };

        match ApiResponse::success_with(&record, None) {
            Ok(body) => {
                info!(record_id, "record retrieved successfully");
                ApiReply::ok(body)
            }
            Err(err) => reply_for_error(&err, "record lookup"),
        }
    }
}

fn reply_for_error(err: &FileProcessingError, operation: &str) -> ApiReply {
    match err.invalid_input_reason() {
        Some(reason) => {
            warn!(operation, %err, "rejected invalid input");
            ApiReply::failure(ErrorKind::InvalidInput, reason)
        }
        None => {
            error!(operation, %err, "unexpected error");
            ApiReply::failure(ErrorKind::Unexpected, INTERNAL_ERROR_MESSAGE)
        }
    }
}
