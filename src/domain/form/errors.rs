//! Form-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised at the form boundary.
///
/// Capacity violations are not here: they are prevented by disablement
/// and surfaced as annotations, never as failures.
#[derive(Debug, Clone, Error)]
pub enum FormError {
    /// The trace payload cannot be read as a form at all.
    #[error("Malformed form payload: {0}")]
    MalformedPayload(String),

    /// The form was already submitted.
    #[error("Form already submitted")]
    AlreadySubmitted,

    /// No button exists at this index.
    #[error("Unknown submit button: {0}")]
    UnknownButton(usize),

    /// The form does not render submit buttons.
    #[error("This form has no submit control")]
    SubmitUnavailable,

    /// Lifecycle transition rejected.
    #[error("Invalid state: {0}")]
    InvalidState(#[from] ValidationError),

    /// The chat transport failed to deliver the payload.
    #[error("Transport failed: {0}")]
    Transport(DomainError),

    /// Serialization or other internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FormError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        FormError::MalformedPayload(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FormError::MalformedPayload(_) => ErrorCode::MalformedPayload,
            FormError::AlreadySubmitted => ErrorCode::FormFinalized,
            FormError::UnknownButton(_) => ErrorCode::UnknownButton,
            FormError::SubmitUnavailable => ErrorCode::SubmitUnavailable,
            FormError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            FormError::Transport(err) => err.code,
            FormError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::Internal(err.to_string())
    }
}

impl From<DomainError> for FormError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::FormFinalized => FormError::AlreadySubmitted,
            ErrorCode::MalformedPayload => FormError::MalformedPayload(err.message),
            ErrorCode::TransportError | ErrorCode::TransportTimeout | ErrorCode::TransportRejected => {
                FormError::Transport(err)
            }
            _ => FormError::Internal(err.to_string()),
        }
    }
}
