use crate::value_objects::{FileExtension, FileName};

/// アップロードを許可する拡張子
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 2] = ["txt", "csv"];

/// Fixed set of file suffixes accepted for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions(Vec<FileExtension>);

impl AllowedExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FileExtension>,
    {
        Self(extensions.into_iter().map(Into::into).collect())
    }

    /// `true` when the text after the last `.` of `filename` is in the set.
    pub fn permits(&self, filename: &str) -> bool {
        let ext = FileName::from(filename).extension();
        !ext.is_empty() && self.0.contains(&ext)
    }

    /// Message shown to clients whose upload has a disallowed suffix.
    pub fn rejection_message(&self) -> String {
        let listed = self.0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        format!("Wrong file type! Only {listed} files are permitted.")
    }
}

impl Default for AllowedExtensions {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_EXTENSIONS)
    }
}
