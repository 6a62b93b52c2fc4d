use serde::{Deserialize, Serialize};

use crate::value_objects::{LineCount, WordCount};

/// Line and word totals of one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextCounts {
    pub line_count: LineCount,
    pub word_count: WordCount,
}

impl TextCounts {
    pub const fn new(line_count: LineCount, word_count: WordCount) -> Self {
        Self { line_count, word_count }
    }
}
