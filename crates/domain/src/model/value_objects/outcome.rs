use serde::{Deserialize, Serialize};

use crate::{
    model::{ProcessingRecord, TextCounts},
    value_objects::{FileName, RecordId},
};

/// Summary handed back to the uploader once a record has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOutcome {
    pub record_id: RecordId,
    pub filename: FileName,
    pub results: TextCounts,
}

impl From<&ProcessingRecord> for ProcessingOutcome {
    fn from(record: &ProcessingRecord) -> Self {
        Self {
            record_id: record.id().clone(),
            filename: record.filename().clone(),
            results: record.counts(),
        }
    }
}
