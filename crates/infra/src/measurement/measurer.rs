use file_processing_domain::{
    TextCounts,
    value_objects::{LineCount, WordCount},
};
use file_processing_ports::measurement::TextMeasurer;
use tracing::debug;

use super::lines::{UniversalLines, count_words};

/// 行数と単語数を 1 パスで計測
#[derive(Debug, Clone, Copy, Default)]
pub struct LineWordMeasurer;

impl TextMeasurer for LineWordMeasurer {
    fn measure(&self, text: &str) -> TextCounts {
        let mut line_count = LineCount::zero();
        let mut word_count = WordCount::zero();

        for line in UniversalLines::new(text) {
            line_count += 1usize;
            word_count += count_words(line);
        }

        let counts = TextCounts::new(line_count, word_count);
        debug!(lines = %counts.line_count, words = %counts.word_count, "counted lines and words");
        counts
    }
}
