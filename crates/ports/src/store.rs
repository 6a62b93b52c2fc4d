// crates/ports/src/store.rs
use file_processing_domain::ProcessingRecord;
use file_processing_shared_kernel::Result;

/// Mapping from record id to processing record.
///
/// Implementations must be safe to share between request handlers.
/// Keys are unique: inserting an id that is already present is an error and
/// leaves the stored record untouched.
pub trait RecordStore: Send + Sync {
    fn insert(&self, record: ProcessingRecord) -> Result<()>;
    fn get(&self, id: &str) -> Result<Option<ProcessingRecord>>;
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
