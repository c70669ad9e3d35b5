//! HTTP chat transport - Delivers interactions to a hosted dialog runtime.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpChatTransportConfig::new(api_key, "user-42")
//!     .with_base_url("https://general-runtime.voiceflow.com")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let transport = HttpChatTransport::new(config)?;
//! ```
//!
//! Each interaction is a `POST {base_url}/state/user/{user_id}/interact`
//! with body `{"action": {"type": "text", "payload": …}}`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ChatTransport, InteractRequest};

/// Default runtime endpoint.
pub const DEFAULT_RUNTIME_URL: &str = "https://general-runtime.voiceflow.com";

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpChatTransportConfig {
    /// API key sent in the `Authorization` header.
    api_key: Secret<String>,
    /// Conversation the interactions belong to.
    pub user_id: String,
    /// Base URL of the dialog runtime.
    pub base_url: String,
    /// Optional version header pinning the published project version.
    pub version_id: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpChatTransportConfig {
    pub fn new(api_key: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            user_id: user_id.into(),
            base_url: DEFAULT_RUNTIME_URL.to_string(),
            version_id: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, Serialize)]
struct InteractBody<'a> {
    action: &'a InteractRequest,
}

/// Chat transport backed by the dialog runtime's REST API.
pub struct HttpChatTransport {
    config: HttpChatTransportConfig,
    client: Client,
}

impl HttpChatTransport {
    /// Creates the transport, building a client with the configured timeout.
    pub fn new(config: HttpChatTransportConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { config, client })
    }

    fn interact_url(&self) -> String {
        format!(
            "{}/state/user/{}/interact",
            self.config.base_url.trim_end_matches('/'),
            self.config.user_id
        )
    }

    fn map_send_error(&self, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::new(
                ErrorCode::TransportTimeout,
                format!(
                    "Interaction timed out after {}s",
                    self.config.timeout.as_secs()
                ),
            )
        } else if e.is_connect() {
            DomainError::transport(format!("Connection failed: {}", e))
        } else {
            DomainError::transport(e.to_string())
        }
    }

    fn map_status(status: StatusCode, body: &str) -> Result<(), DomainError> {
        if status.is_success() {
            return Ok(());
        }
        let error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                DomainError::new(ErrorCode::TransportRejected, "Runtime rejected the API key")
            }
            StatusCode::TOO_MANY_REQUESTS => {
                DomainError::new(ErrorCode::TransportRejected, "Runtime rate limit exceeded")
            }
            s if s.is_client_error() => DomainError::new(
                ErrorCode::TransportRejected,
                format!("Runtime refused the interaction ({})", s.as_u16()),
            ),
            s => DomainError::transport(format!("Runtime error ({})", s.as_u16())),
        };
        Err(error.with_detail("status", status.as_u16().to_string()).with_detail("body", body))
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn interact(&self, request: InteractRequest) -> Result<(), DomainError> {
        let mut builder = self
            .client
            .post(self.interact_url())
            .header("Authorization", self.config.api_key())
            .header("Content-Type", "application/json");
        if let Some(version) = &self.config.version_id {
            builder = builder.header("versionID", version);
        }

        let response = builder
            .json(&InteractBody { action: &request })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(user_id = %self.config.user_id, "Interaction delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Runtime refused interaction");
        Self::map_status(status, &body)
    }
}
