// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileProcessingError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileProcessingError>,
    },

    /// Malformed or disallowed request content. The reason is shown to clients as-is.
    #[error("{reason}")]
    InvalidInput { reason: String },

    #[error("Record store operation failed: {operation} - {details}")]
    Storage { operation: String, details: String },

    #[error("Failed to serialize {format} payload: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, FileProcessingError>;

/// HTTP に変換される前の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Unexpected,
}

impl FileProcessingError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    pub fn storage(operation: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Storage {
            operation: operation.into(),
            details: details.into(),
        }
    }

    /// Innermost error once every context layer is peeled off.
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root_cause() {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            _ => ErrorKind::Unexpected,
        }
    }

    /// Client-facing message for invalid input; `None` for anything internal.
    pub fn invalid_input_reason(&self) -> Option<&str> {
        match self.root_cause() {
            Self::InvalidInput { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FileProcessingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileProcessingError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileProcessingError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileProcessingError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
