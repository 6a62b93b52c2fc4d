//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`store`]: Keyed storage of processing records
//! - [`identity`]: Record id generation and the wall clock
//! - [`measurement`]: Line and word counting of decoded text
//!
//! These ports allow the use-case layer to remain independent of
//! specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod identity;
pub mod measurement;
pub mod store;
