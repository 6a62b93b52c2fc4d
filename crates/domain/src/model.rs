pub mod entities;
pub mod value_objects;

pub use entities::ProcessingRecord;
pub use value_objects::{ProcessingOutcome, TextCounts};
