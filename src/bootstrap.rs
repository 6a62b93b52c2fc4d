// src/bootstrap.rs
use std::sync::Arc;

use anyhow::{Context, Result};
use file_processing_infra::{InMemoryRecordStore, LineWordMeasurer, SystemClock, UuidGenerator};
use file_processing_shared_kernel::FileSize;
use file_processing_usecase::{ProcessingService, ServicePorts};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    config::{self, ServerConfig},
    controller::UploadController,
    logging, router,
};

/// Process-wide state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<UploadController>,
    pub max_upload: FileSize,
}

impl AppState {
    pub fn new(controller: Arc<UploadController>, max_upload: FileSize) -> Self {
        Self { controller, max_upload }
    }
}

/// Wires the production adapters into a fresh service and controller.
pub fn build_state(config: &ServerConfig) -> AppState {
    let ports = ServicePorts {
        store: Arc::new(InMemoryRecordStore::new()),
        measurer: Arc::new(LineWordMeasurer),
        ids: Arc::new(UuidGenerator),
        clock: Arc::new(SystemClock),
    };
    let service = Arc::new(ProcessingService::new(ports));
    AppState::new(Arc::new(UploadController::new(service)), config.max_upload)
}

pub async fn run() -> Result<()> {
    let config = config::load_config().context("invalid configuration")?;
    run_with_config(config).await
}

pub async fn run_with_config(config: ServerConfig) -> Result<()> {
    logging::init_logging(&config)?;

    let state = build_state(&config);
    let app = router::create_router(state.clone());
    info!(max_upload = %config.max_upload.to_human(), "application setup completed");

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    info!(addr = %config.addr, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    match stored_records(&state.controller) {
        Some(records) => info!(records, "server stopped"),
        None => info!("server stopped"),
    }
    Ok(())
}

/// Number of stored records; `None` when the store cannot report it.
fn stored_records(controller: &UploadController) -> Option<usize> {
    match controller.service().record_count() {
        Ok(records) => Some(records),
        Err(err) => {
            warn!(%err, "record count unavailable");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
