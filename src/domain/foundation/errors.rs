//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller contract errors
    InvalidInput,

    // State errors
    InvalidTransition,
    NotReady,

    // Content errors (injected catalog / action tables)
    InvalidContent,

    // Session registry errors
    SessionNotFound,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::NotReady => "NOT_READY",
            ErrorCode::InvalidContent => "INVALID_CONTENT",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Every failure in this crate is recoverable: the operation that produced it
/// left all state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an invalid-transition error.
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidTransition, message)
    }

    /// Creates an invalid-input error for a specific field.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message).with_detail("field", field)
    }

    /// Creates a not-ready error.
    pub fn not_ready(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotReady, message)
    }

    /// Creates an invalid-content error.
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidContent, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns a detail value by key.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::invalid_input(field, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("label");
        assert_eq!(format!("{}", err), "Field 'label' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("score", 0, 10, 11);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 0 and 10, got 11"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("id", "contains whitespace");
        assert_eq!(
            format!("{}", err),
            "Field 'id' has invalid format: contains whitespace"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::invalid_transition("Cannot complete baseline yet");
        assert_eq!(
            format!("{}", err),
            "[INVALID_TRANSITION] Cannot complete baseline yet"
        );
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::invalid_input("score", "Score out of range")
            .with_detail("value", "12");

        assert_eq!(err.detail("field"), Some("score"));
        assert_eq!(err.detail("value"), Some("12"));
        assert_eq!(err.detail("missing"), None);
    }

    #[test]
    fn validation_error_converts_to_invalid_input() {
        let err: DomainError = ValidationError::out_of_range("score", 0, 10, -1).into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.detail("field"), Some("score"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidInput), "INVALID_INPUT");
        assert_eq!(format!("{}", ErrorCode::NotReady), "NOT_READY");
        assert_eq!(format!("{}", ErrorCode::SessionNotFound), "SESSION_NOT_FOUND");
    }
}
