//! Recording chat transport for testing.
//!
//! Captures every interaction instead of sending it, and can be told to
//! fail so callers' error paths are exercised.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ChatTransport, InteractRequest};

/// In-memory transport that records interactions.
///
/// # Example
///
/// ```ignore
/// let transport = Arc::new(RecordingChatTransport::new());
/// session.submit(0).await?;
/// assert_eq!(transport.payloads(), vec!["Foo".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingChatTransport {
    sent: Arc<Mutex<Vec<InteractRequest>>>,
    failure: Option<ErrorCode>,
}

impl RecordingChatTransport {
    /// Creates a transport that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that rejects every interaction with `code`.
    pub fn failing(code: ErrorCode) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(code),
        }
    }

    // === Test Helpers ===

    /// Returns every accepted interaction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn sent(&self) -> Vec<InteractRequest> {
        self.sent
            .lock()
            .expect("RecordingChatTransport: lock poisoned")
            .clone()
    }

    /// Returns the payload text of every accepted interaction.
    pub fn payloads(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.payload).collect()
    }

    /// Returns count of accepted interactions.
    pub fn count(&self) -> usize {
        self.sent
            .lock()
            .expect("RecordingChatTransport: lock poisoned")
            .len()
    }
}

#[async_trait]
impl ChatTransport for RecordingChatTransport {
    async fn interact(&self, request: InteractRequest) -> Result<(), DomainError> {
        if let Some(code) = self.failure {
            return Err(DomainError::new(code, "Simulated transport failure"));
        }
        self.sent
            .lock()
            .expect("RecordingChatTransport: lock poisoned")
            .push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_interactions_in_order() {
        let transport = RecordingChatTransport::new();
        transport.interact(InteractRequest::text("a")).await.unwrap();
        transport.interact(InteractRequest::text("b")).await.unwrap();

        assert_eq!(transport.payloads(), vec!["a", "b"]);
        assert_eq!(transport.count(), 2);
    }

    #[tokio::test]
    async fn failing_transport_records_nothing() {
        let transport = RecordingChatTransport::failing(ErrorCode::TransportTimeout);
        let err = transport
            .interact(InteractRequest::text("a"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::TransportTimeout);
        assert_eq!(transport.count(), 0);
    }

    #[tokio::test]
    async fn clones_share_the_log() {
        let transport = RecordingChatTransport::new();
        let clone = transport.clone();
        clone.interact(InteractRequest::text("shared")).await.unwrap();
        assert_eq!(transport.payloads(), vec!["shared"]);
    }
}
