#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod policy;
pub mod sanitize;

pub use model::{ProcessingOutcome, ProcessingRecord, TextCounts};
pub use policy::AllowedExtensions;
pub use sanitize::secure_filename;

pub use file_processing_shared_kernel::value_objects;
