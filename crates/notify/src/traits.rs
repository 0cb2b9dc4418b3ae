//! Channel trait definition and shared error types.

use std::path::PathBuf;

/// Errors that can occur while configuring or delivering notifications.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot find {}", path.display())]
    ConfigurationMissing { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported notification service: {0}")]
    UnsupportedDestination(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP status returned by a destination for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub status: u16,
    /// Reason phrase, e.g. `"OK"` or `"Unauthorized"`.
    pub reason: String,
}

impl DeliveryOutcome {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Any 2xx status counts as delivered.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for notification destinations.
///
/// Each implementation owns the secrets it needs, so adding a destination
/// means adding an implementation rather than another branch in the
/// dispatcher.
#[async_trait::async_trait]
pub trait Channel: Send + Sync {
    /// Send the composed message once. Non-2xx responses are returned as an
    /// `Ok` outcome; only transport failures are errors.
    async fn send(&self, message: &str) -> Result<DeliveryOutcome, NotifyError>;

    /// Human-readable name for this channel (e.g., "pushover", "slack").
    fn channel_name(&self) -> &str;
}

/// Result of dispatching a message to a single channel.
#[derive(Debug, Clone)]
pub struct DeliveryResult {
    pub channel: String,
    /// `None` when the request never produced a response.
    pub status: Option<u16>,
    pub reason: String,
    pub success: bool,
    pub duration_ms: u64,
}

impl DeliveryResult {
    pub(crate) fn from_outcome(channel: &str, outcome: DeliveryOutcome, duration_ms: u64) -> Self {
        Self {
            channel: channel.to_string(),
            success: outcome.is_success(),
            status: Some(outcome.status),
            reason: outcome.reason,
            duration_ms,
        }
    }

    pub(crate) fn from_error(channel: &str, error: &NotifyError, duration_ms: u64) -> Self {
        Self {
            channel: channel.to_string(),
            status: None,
            reason: error.to_string(),
            success: false,
            duration_ms,
        }
    }
}
