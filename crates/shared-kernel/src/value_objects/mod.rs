// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_info;
pub mod record_id;

pub use counts::{LineCount, WordCount};
pub use file_info::{FileExtension, FileName, FileSize};
pub use record_id::RecordId;
