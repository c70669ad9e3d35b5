//! Stdout chat transport - prints interactions for local replays.

use async_trait::async_trait;
use std::io::Write;

use crate::domain::foundation::DomainError;
use crate::ports::{ChatTransport, InteractRequest};

/// Writes each interaction as one JSON line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutChatTransport;

impl StdoutChatTransport {
    pub fn new() -> Self {
        Self
    }

    fn render(request: &InteractRequest) -> Result<String, DomainError> {
        serde_json::to_string(request)
            .map_err(|e| DomainError::transport(format!("Failed to encode interaction: {}", e)))
    }
}

#[async_trait]
impl ChatTransport for StdoutChatTransport {
    async fn interact(&self, request: InteractRequest) -> Result<(), DomainError> {
        let line = Self::render(&request)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)
            .map_err(|e| DomainError::transport(format!("stdout unavailable: {}", e)))
    }
}
