//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    MalformedPayload,

    // Form lifecycle errors
    InvalidStateTransition,
    FormFinalized,
    UnknownButton,
    SubmitUnavailable,

    // Transport errors
    TransportError,
    TransportTimeout,
    TransportRejected,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MalformedPayload => "MALFORMED_PAYLOAD",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::FormFinalized => "FORM_FINALIZED",
            ErrorCode::UnknownButton => "UNKNOWN_BUTTON",
            ErrorCode::SubmitUnavailable => "SUBMIT_UNAVAILABLE",
            ErrorCode::TransportError => "TRANSPORT_ERROR",
            ErrorCode::TransportTimeout => "TRANSPORT_TIMEOUT",
            ErrorCode::TransportRejected => "TRANSPORT_REJECTED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Ports return this type; layer-specific errors convert from it.
#[derive(Debug, Clone)]
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

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("label");
        assert_eq!(format!("{}", err), "Field 'label' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("state_transition", "Submitted is terminal");
        assert_eq!(
            format!("{}", err),
            "Field 'state_transition' has invalid format: Submitted is terminal"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::FormFinalized, "Form already submitted");
        assert_eq!(format!("{}", err), "[FORM_FINALIZED] Form already submitted");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::transport("connection refused")
            .with_detail("endpoint", "interact")
            .with_detail("status", "503");

        assert_eq!(err.code, ErrorCode::TransportError);
        assert_eq!(err.details.get("endpoint"), Some(&"interact".to_string()));
        assert_eq!(err.details.get("status"), Some(&"503".to_string()));
    }
}
