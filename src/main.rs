// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    file_processing::bootstrap::run().await
}
