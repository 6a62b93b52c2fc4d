//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`service`]: validate an upload, count it, store the record, look records up
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod service;

pub use service::{ProcessingService, ServicePorts};
