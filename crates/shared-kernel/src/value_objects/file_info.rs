// crates/shared-kernel/src/value_objects/file_info.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of an uploaded file as it is stored in a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substring after the last `.`; a name without a dot has no extension.
    pub fn extension(&self) -> FileExtension {
        self.0
            .rsplit_once('.')
            .map(|(_, ext)| FileExtension::from(ext))
            .unwrap_or_default()
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    /// Lowercased file extension without the leading dot.
    pub fn new(ext: impl Into<String>) -> Self {
        Self(ext.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn no_ext() -> Self {
        Self(String::new())
    }
}

impl Default for FileExtension {
    fn default() -> Self {
        Self::no_ext()
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "(noext)")
        } else {
            write!(f, ".{}", self.0)
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    const KIB: u64 = 1024;
    const MIB: u64 = Self::KIB * 1024;
    const GIB: u64 = Self::MIB * 1024;

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn from_mebibytes(mib: u64) -> Self {
        Self(mib * Self::MIB)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Byte count clamped to the platform's `usize`.
    pub fn as_usize(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }

    /// Returns a base-2 human readable representation (KiB, MiB, GiB).
    pub fn to_human(self) -> String {
        let bytes = self.0;
        if bytes < Self::KIB {
            return format!("{bytes} B");
        }

        let kib = bytes as f64 / Self::KIB as f64;
        if bytes < Self::MIB {
            return format!("{kib:.1} KiB");
        }

        let mib = kib / 1024.0;
        if bytes < Self::GIB {
            return format!("{mib:.1} MiB");
        }

        format!("{:.1} GiB", mib / 1024.0)
    }

    /// Short label for limits that are whole units, e.g. `1MB` or `512KB`.
    pub fn to_limit_label(self) -> String {
        match self.0 {
            0 => "0 bytes".to_string(),
            b if b % Self::GIB == 0 => format!("{}GB", b / Self::GIB),
            b if b % Self::MIB == 0 => format!("{}MB", b / Self::MIB),
            b if b % Self::KIB == 0 => format!("{}KB", b / Self::KIB),
            b => format!("{b} bytes"),
        }
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
