// src/router.rs
use std::any::Any;

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, Path, State,
        multipart::{MultipartError, MultipartRejection},
        rejection::PathRejection,
    },
    http::{HeaderMap, StatusCode, header::CONTENT_LENGTH},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use file_processing_shared_kernel::ErrorKind;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::{
    bootstrap::AppState,
    controller::{ApiReply, FilePart, RECORD_NOT_FOUND_MESSAGE},
    envelope::TransportError,
};

/// Multipart field that carries the upload.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

/// Create the HTTP router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload.as_usize();
    Router::new()
        .route("/upload", post(upload_file))
        .route("/records/:record_id", get(get_processing_record))
        .route("/health", get(health_check))
        .fallback(endpoint_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    if declared_length(&headers).is_some_and(|len| len > state.max_upload.bytes()) {
        return payload_too_large(&state);
    }

    let file = match multipart {
        Ok(multipart) => match read_file_part(multipart).await {
            Ok(file) => file,
            Err(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => return payload_too_large(&state),
            Err(err) => {
                warn!(%err, "malformed multipart body");
                None
            }
        },
        Err(rejection) => {
            warn!(%rejection, "upload is not a multipart request");
            None
        }
    };

    state.controller.upload_file(file).into_response()
}

/// An id that cannot be decoded can never name a stored record.
async fn get_processing_record(
    State(state): State<AppState>,
    record_id: Result<Path<String>, PathRejection>,
) -> ApiReply {
    match record_id {
        Ok(Path(record_id)) => state.controller.get_processing_record(&record_id),
        Err(rejection) => {
            warn!(%rejection, "undecodable record id");
            ApiReply::failure(ErrorKind::NotFound, RECORD_NOT_FOUND_MESSAGE)
        }
    }
}

async fn health_check() -> Json<HealthStatus> {
    info!("health check called");
    Json(HealthStatus {
        status: "healthy",
        service: "file-processing",
    })
}

async fn endpoint_not_found(uri: axum::http::Uri) -> (StatusCode, Json<TransportError>) {
    warn!(path = %uri.path(), "404");
    (StatusCode::NOT_FOUND, Json(TransportError::new("Endpoint not found")))
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers.get(CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

/// First `file` part that carries a filename; other parts are skipped.
async fn read_file_part(mut multipart: Multipart) -> Result<Option<FilePart>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let content = field.bytes().await?;
        return Ok(Some(FilePart::new(filename, content.to_vec())));
    }
    Ok(None)
}

fn payload_too_large(state: &AppState) -> Response {
    warn!(limit = %state.max_upload, "file too large");
    let message = format!(
        "File is too large. Maximum size is {}.",
        state.max_upload.to_limit_label()
    );
    (StatusCode::PAYLOAD_TOO_LARGE, Json(TransportError::new(message))).into_response()
}

fn internal_error(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(TransportError::new("Internal server error")),
    )
        .into_response()
}
