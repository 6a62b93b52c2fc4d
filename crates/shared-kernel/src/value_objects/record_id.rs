// crates/shared-kernel/src/value_objects/record_id.rs
use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Opaque, server generated identifier of a processing record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// Lets `HashMap<RecordId, _>` be queried with a plain `&str`.
impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
