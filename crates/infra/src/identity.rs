// crates/infra/src/identity.rs
use chrono::{DateTime, Local};
use file_processing_domain::value_objects::RecordId;
use file_processing_ports::identity::{Clock, IdGenerator};
use uuid::Uuid;

/// Random (v4) UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::new(Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
