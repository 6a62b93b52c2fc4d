pub mod lines;
pub mod measurer;

pub use lines::{UniversalLines, count_words};
pub use measurer::LineWordMeasurer;
