// crates/infra/src/persistence/memory_store.rs
use std::{
    collections::{HashMap, hash_map::Entry},
    sync::RwLock,
};

use file_processing_domain::{ProcessingRecord, value_objects::RecordId};
use file_processing_ports::store::RecordStore;
use file_processing_shared_kernel::{FileProcessingError, Result};
use tracing::debug;

/// Process-local record store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<RecordId, ProcessingRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(operation: &str) -> FileProcessingError {
    FileProcessingError::storage(operation, "record map lock poisoned")
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, record: ProcessingRecord) -> Result<()> {
        let mut records = self.records.write().map_err(|_| poisoned("insert"))?;
        match records.entry(record.id().clone()) {
            Entry::Occupied(entry) => Err(FileProcessingError::storage(
                "insert",
                format!("record id '{}' already exists", entry.key()),
            )),
            Entry::Vacant(slot) => {
                debug!(record_id = %slot.key(), "inserted record");
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Result<Option<ProcessingRecord>> {
        let records = self.records.read().map_err(|_| poisoned("get"))?;
        Ok(records.get(id).cloned())
    }

    fn len(&self) -> Result<usize> {
        let records = self.records.read().map_err(|_| poisoned("len"))?;
        Ok(records.len())
    }
}
