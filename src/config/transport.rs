//! Chat transport configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where interactions are delivered
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Print interactions on stdout
    #[default]
    Stdout,
    /// Post interactions to the dialog runtime
    Http,
}

/// Chat transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TransportConfig {
    #[serde(default)]
    pub kind: TransportKind,

    /// Runtime API key
    pub api_key: Option<String>,

    /// Runtime base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Conversation the interactions belong to
    pub user_id: Option<String>,

    /// Published project version to target
    pub version_id: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl TransportConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_http(&self) -> bool {
        self.kind == TransportKind::Http
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=300).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if !self.is_http() {
            return Ok(());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.user_id.as_ref().map_or(true, |id| id.is_empty()) {
            return Err(ValidationError::MissingRequired("TRANSPORT__USER_ID"));
        }
        if self.api_key.as_ref().map_or(true, |key| key.is_empty()) {
            return Err(ValidationError::MissingRequired("TRANSPORT__API_KEY"));
        }
        Ok(())
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: TransportKind::default(),
            api_key: None,
            base_url: default_base_url(),
            user_id: None,
            version_id: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://general-runtime.voiceflow.com".to_string()
}

fn default_timeout() -> u64 {
    30
}
