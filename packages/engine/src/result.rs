use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Successful conversion and evaluation of one expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// The expression rendered in the target notation
    pub converted: String,
    pub value: f64,
}

/// Outcome of [`crate::process`], shaped for callers outside Rust:
/// `{"status":"success","converted":..,"value":..}` or `{"status":"error","message":..}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessResult {
    Success { converted: String, value: f64 },
    Error { message: String },
}

impl ProcessResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn converted(&self) -> Option<&str> {
        match self {
            Self::Success { converted, .. } => Some(converted),
            Self::Error { .. } => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }
}

impl From<Result<Conversion, EngineError>> for ProcessResult {
    fn from(result: Result<Conversion, EngineError>) -> Self {
        match result {
            Ok(Conversion { converted, value }) => Self::Success { converted, value },
            Err(err) => Self::Error {
                message: err.to_string(),
            },
        }
    }
}
