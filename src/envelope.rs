// src/envelope.rs
//! Uniform JSON bodies returned by every endpoint.

use serde::Serialize;
use serde_json::Value;

use file_processing_shared_kernel::Result;

/// `{"status": "success" | "error", ...}` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Error {
        message: String,
        /// Reserved; no caller sets it yet.
        #[serde(skip_serializing_if = "Option::is_none")]
        error_code: Option<String>,
    },
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

impl ApiResponse {
    /// Success envelope; empty data and empty messages are left out.
    pub fn success(data: Option<Value>, message: Option<&str>) -> Self {
        Self::Success {
            data: data.filter(|value| !is_blank(value)),
            message: message.filter(|m| !m.is_empty()).map(str::to_owned),
        }
    }

    /// # Errors
    ///
    /// Fails when `data` cannot be represented as JSON.
    pub fn success_with<T: Serialize>(data: &T, message: Option<&str>) -> Result<Self> {
        Ok(Self::success(Some(serde_json::to_value(data)?), message))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            error_code: None,
        }
    }

    pub fn error_with_code(message: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            error_code: Some(error_code.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } => message.as_deref(),
            Self::Error { message, .. } => Some(message),
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data, .. } => data.as_ref(),
            Self::Error { .. } => None,
        }
    }
}

/// `{"error": "..."}` body used outside the routed handlers (limits, unknown routes, panics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportError {
    pub error: String,
}

impl TransportError {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
