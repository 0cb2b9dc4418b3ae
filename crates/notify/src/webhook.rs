//! Slack and Discord incoming-webhook notifiers.
//!
//! Both services accept a JSON object with a single text field posted to
//! the webhook URL; they differ only in the field name.

use crate::credentials::ServiceCredentials;
use crate::traits::{Channel, DeliveryOutcome, NotifyError};

/// Delivers notifications as JSON to an incoming webhook URL.
pub struct WebhookChannel {
    name: &'static str,
    /// JSON field carrying the message text.
    payload_key: &'static str,
    url: String,
    client: reqwest::Client,
}

impl WebhookChannel {
    /// Slack webhook, payload `{"text": message}`.
    pub fn slack(creds: &ServiceCredentials, client: reqwest::Client) -> Result<Self, NotifyError> {
        Self::from_credentials("slack", "text", creds, client)
    }

    /// Discord webhook, payload `{"content": message}`.
    pub fn discord(
        creds: &ServiceCredentials,
        client: reqwest::Client,
    ) -> Result<Self, NotifyError> {
        Self::from_credentials("discord", "content", creds, client)
    }

    fn from_credentials(
        name: &'static str,
        payload_key: &'static str,
        creds: &ServiceCredentials,
        client: reqwest::Client,
    ) -> Result<Self, NotifyError> {
        Ok(Self {
            name,
            payload_key,
            url: creds.secret(name, "webhook_url")?,
            client,
        })
    }

    fn payload(&self, message: &str) -> serde_json::Value {
        let mut payload = serde_json::Map::new();
        payload.insert(
            self.payload_key.to_string(),
            serde_json::Value::String(message.to_string()),
        );
        serde_json::Value::Object(payload)
    }
}

#[async_trait::async_trait]
impl Channel for WebhookChannel {
    async fn send(&self, message: &str) -> Result<DeliveryOutcome, NotifyError> {
        let body = serde_json::to_string(&self.payload(message))
            .map_err(|e| NotifyError::Config(format!("failed to serialize payload: {e}")))?;

        tracing::debug!(channel = self.name, "Sending webhook notification");

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(DeliveryOutcome::from_status(response.status()))
    }

    fn channel_name(&self) -> &str {
        self.name
    }
}
