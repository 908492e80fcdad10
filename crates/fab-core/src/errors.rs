//! Structured error types shared across FAB crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`FabError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending input, paths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum FabError {
    /// The requested group order is not a positive integer.
    #[error("invalid input: {0}")]
    Input(ErrorInfo),
    /// Configuration file or flag combination errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Filesystem errors while reading configuration or writing output.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl FabError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            FabError::Input(info)
            | FabError::Config(info)
            | FabError::Io(info)
            | FabError::Serde(info) => info,
        }
    }

    /// Builds an [`FabError::Input`] for a rejected group order, recording the
    /// offending text under the `order` context key.
    pub fn invalid_order(
        code: &str,
        message: impl Into<String>,
        order: impl Into<String>,
    ) -> Self {
        FabError::Input(ErrorInfo::new(code, message).with_context("order", order))
    }

    /// The offending order text, when the error came from order validation.
    pub fn rejected_order(&self) -> Option<&str> {
        match self {
            FabError::Input(info) => info.context.get("order").map(String::as_str),
            _ => None,
        }
    }

    /// Returns true when the error reports a malformed group order.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FabError::Input(_))
    }
}
