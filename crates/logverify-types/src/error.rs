use serde::{Deserialize, Serialize};
use std::fmt;

/// Captured surrogate for an exception attached to a log call.
///
/// The facade boundary only preserves the error's type and message, so two
/// independently constructed errors of the same type and message are
/// indistinguishable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedError {
    type_name: String,
    message: String,
}

impl LoggedError {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Capture the type name and display message of any concrete error.
    pub fn capture<E: std::error::Error>(error: &E) -> Self {
        Self {
            type_name: std::any::type_name::<E>().to_string(),
            message: error.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)
    }
}

impl std::error::Error for LoggedError {}
