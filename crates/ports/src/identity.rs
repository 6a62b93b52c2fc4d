// crates/ports/src/identity.rs
use chrono::{DateTime, Local};
use file_processing_shared_kernel::RecordId;

pub trait IdGenerator: Send + Sync {
    /// Returns an id that has never been handed out before.
    fn next_id(&self) -> RecordId;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
