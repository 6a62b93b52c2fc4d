pub mod outcome;
pub mod text_counts;

pub use outcome::ProcessingOutcome;
pub use text_counts::TextCounts;
