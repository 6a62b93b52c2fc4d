pub mod processing_record;

pub use processing_record::ProcessingRecord;
