//! # file_processing
//!
//! HTTP service that counts the lines and words of uploaded text files and
//! keeps the results in memory for later lookup.
//!
//! - [`router`]: routes, transport limits and fallbacks
//! - [`controller`]: request validation and error-to-status mapping
//! - [`envelope`]: JSON response shapes
//! - [`bootstrap`]: wiring of adapters into the service at startup

// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod envelope;
pub mod logging;
pub mod parsers;
pub mod router;

pub use bootstrap::{AppState, build_state};
pub use config::ServerConfig;
pub use router::create_router;
