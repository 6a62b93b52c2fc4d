// crates/ports/src/measurement.rs
use file_processing_domain::TextCounts;

pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str) -> TextCounts;
}
