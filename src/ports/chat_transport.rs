//! ChatTransport port - Interface for sending a user turn to the chat engine.
//!
//! This is the only way a form reports back: a single text interaction,
//! sent either when a single-select option is chosen or when a submit
//! button is clicked.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::form::OutboundPayload;
use crate::domain::foundation::DomainError;

/// Kind of interaction sent to the conversational engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    #[default]
    Text,
}

/// A single outbound interaction, serialized as `{"type": "text", "payload": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractRequest {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub payload: String,
}

impl InteractRequest {
    /// Creates a text interaction.
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            kind: InteractionKind::Text,
            payload: payload.into(),
        }
    }
}

impl From<OutboundPayload> for InteractRequest {
    fn from(payload: OutboundPayload) -> Self {
        Self::text(payload.into_string())
    }
}

/// Port for delivering interactions to the conversational engine.
///
/// Implementations deliver at most once; retries are the caller's concern.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends one interaction.
    async fn interact(&self, request: InteractRequest) -> Result<(), DomainError>;
}
