// src/logging.rs
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

/// `RUST_LOG` wins over the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// `<dir>/file_processor_YYYYMMDD_HHMMSS.log`
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(format!("file_processor_{}.log", Local::now().format("%Y%m%d_%H%M%S")))
}

/// Installs the global subscriber: console output, plus a timestamped log
/// file when `log_dir` is configured. Returns the log file path, if any.
///
/// # Errors
///
/// Fails when the log directory or file cannot be created, or when a global
/// subscriber is already installed.
pub fn init_logging(config: &ServerConfig) -> Result<Option<PathBuf>> {
    let console = fmt::layer().with_target(false);

    let Some(dir) = &config.log_dir else {
        tracing_subscriber::registry()
            .with(env_filter(&config.log_level))
            .with(console)
            .try_init()
            .context("installing tracing subscriber")?;
        return Ok(None);
    };

    fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
    let path = log_file_path(dir);
    let file = File::create(&path).with_context(|| format!("creating log file {}", path.display()))?;
    let file_layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter(&config.log_level))
        .with(console)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(log_file = %path.display(), "logging configured");
    Ok(Some(path))
}
