// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod identity;
pub mod measurement;
pub mod persistence;

pub use identity::{SystemClock, UuidGenerator};
pub use measurement::LineWordMeasurer;
pub use persistence::InMemoryRecordStore;
