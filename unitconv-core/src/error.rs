//! Structured errors for the conversion shell
//!
//! Errors never end a session. They carry a machine-readable code, a
//! message, and an optional suggestion the shell prints alongside.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_CONVERSION: &str = "INVALID_CONVERSION";
    pub const MALFORMED_VALUE: &str = "MALFORMED_VALUE";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Input rejected, session continues
    Error,
    /// Session cannot start
    Fatal,
}

/// Structured error with code and suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitconvError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    pub severity: Severity,
}

impl UnitconvError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_conversion(from: &str, to: &str) -> Self {
        Self::new(
            codes::INVALID_CONVERSION,
            format!("Invalid conversion: {} > {}", from, to),
        )
        .with_suggestion("Pick two different units of the same kind")
    }

    pub fn malformed_value(input: impl Into<String>) -> Self {
        Self::new(
            codes::MALFORMED_VALUE,
            format!("Not a number: '{}'", input.into()),
        )
        .with_suggestion("Enter a decimal such as 12.5, -40 or 1e3")
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
            .with_suggestion("Ensure the denominator is not zero")
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Configuration error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for UnitconvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnitconvError {}

impl From<NumberError> for UnitconvError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::malformed_value(s),
            NumberError::DivisionByZero => Self::div_zero(),
        }
    }
}
