use std::sync::Arc;

use file_processing_domain::{AllowedExtensions, ProcessingOutcome, ProcessingRecord, value_objects::FileName};
use file_processing_ports::{
    identity::{Clock, IdGenerator},
    measurement::TextMeasurer,
    store::RecordStore,
};
use file_processing_shared_kernel::{ErrorContext, FileProcessingError, Result};
use tracing::{debug, error, info, warn};

/// Adapters the service is wired with at startup.
#[derive(Clone)]
pub struct ServicePorts {
    pub store: Arc<dyn RecordStore>,
    pub measurer: Arc<dyn TextMeasurer>,
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

/// Business rules of the upload flow: extension check, counting, record
/// creation and lookup. The only owner of the record store.
pub struct ProcessingService {
    ports: ServicePorts,
    allowed: AllowedExtensions,
}

impl ProcessingService {
    pub fn new(ports: ServicePorts) -> Self {
        Self {
            ports,
            allowed: AllowedExtensions::default(),
        }
    }

    pub fn allowed_extensions_message(&self) -> String {
        self.allowed.rejection_message()
    }

    pub fn is_allowed_file(&self, filename: &str) -> bool {
        debug!(filename, "validating file extension");
        let allowed = self.allowed.permits(filename);
        if allowed {
            debug!(filename, "file type allowed");
        } else {
            warn!(filename, "file type not allowed");
        }
        allowed
    }

    /// Counts `content` and stores a new record for it.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for empty content, an empty filename or bytes that are
    /// not UTF-8. A store failure is returned with context and is not an
    /// input error. Nothing is stored when an error is returned.
    pub fn process_file_content(&self, content: &[u8], filename: &str) -> Result<ProcessingOutcome> {
        info!(filename, bytes = content.len(), "starting file processing");

        if content.is_empty() {
            error!("file content is empty");
            return Err(FileProcessingError::invalid_input("File content is empty"));
        }
        if filename.is_empty() {
            error!("filename is required");
            return Err(FileProcessingError::invalid_input("Filename is required"));
        }

        let text = std::str::from_utf8(content).map_err(|err| {
            error!(%err, "error decoding file");
            FileProcessingError::invalid_input("File content is not valid UTF-8 text")
        })?;

        let counts = self.ports.measurer.measure(text);
        info!(
            filename,
            line_count = %counts.line_count,
            word_count = %counts.word_count,
            "file processing completed"
        );

        let record = ProcessingRecord::new(
            self.ports.ids.next_id(),
            FileName::from(filename),
            counts,
            self.ports.clock.now(),
        );
        let outcome = ProcessingOutcome::from(&record);

        self.ports
            .store
            .insert(record)
            .with_context(|| format!("saving record {} for {filename}", outcome.record_id))?;
        info!(record_id = %outcome.record_id, filename, "saved record");

        Ok(outcome)
    }

    /// Looks a record up. An unknown id is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `record_id` is empty; store failures otherwise.
    pub fn get_record_by_id(&self, record_id: &str) -> Result<Option<ProcessingRecord>> {
        debug!(record_id, "retrieving record");

        if record_id.is_empty() {
            error!("record id is empty");
            return Err(FileProcessingError::invalid_input("Record id is empty"));
        }

        let record = self
            .ports
            .store
            .get(record_id)
            .with_context(|| format!("loading record {record_id}"))?;

        match &record {
            Some(_) => debug!(record_id, "record found"),
            None => warn!(record_id, "record not found"),
        }
        Ok(record)
    }

    pub fn record_count(&self) -> Result<usize> {
        self.ports.store.len().context("counting records")
    }
}
