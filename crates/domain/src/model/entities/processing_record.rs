use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{
    model::TextCounts,
    value_objects::{FileName, LineCount, RecordId, WordCount},
};

/// 1 回のアップロード処理結果。生成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRecord {
    id: RecordId,
    filename: FileName,
    line_count: LineCount,
    word_count: WordCount,
    timestamp: DateTime<Local>,
}

impl ProcessingRecord {
    pub fn new(id: RecordId, filename: FileName, counts: TextCounts, timestamp: DateTime<Local>) -> Self {
        Self {
            id,
            filename,
            line_count: counts.line_count,
            word_count: counts.word_count,
            timestamp,
        }
    }

    #[inline]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[inline]
    pub fn filename(&self) -> &FileName {
        &self.filename
    }

    #[inline]
    pub fn line_count(&self) -> LineCount {
        self.line_count
    }

    #[inline]
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn counts(&self) -> TextCounts {
        TextCounts::new(self.line_count, self.word_count)
    }
}
