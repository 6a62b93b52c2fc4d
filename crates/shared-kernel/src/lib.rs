// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorContext, ErrorKind, FileProcessingError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileExtension, FileName, FileSize, LineCount, RecordId, WordCount};
