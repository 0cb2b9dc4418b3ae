//! Pushover Messages API notifier.
//!
//! Delivers the message as query parameters on a POST to
//! `https://api.pushover.net/1/messages.json` with an empty body.

use crate::credentials::ServiceCredentials;
use crate::traits::{Channel, DeliveryOutcome, NotifyError};

pub const PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Sends notifications via the Pushover API.
pub struct PushoverChannel {
    api_token: String,
    user_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl PushoverChannel {
    /// Build from the `pushover` credentials entry.
    ///
    /// Requires `api_token` and `user_key`. An optional `api_url` replaces the
    /// public endpoint (useful for relays and tests).
    pub fn from_credentials(
        creds: &ServiceCredentials,
        client: reqwest::Client,
    ) -> Result<Self, NotifyError> {
        Ok(Self {
            api_token: creds.secret("pushover", "api_token")?,
            user_key: creds.secret("pushover", "user_key")?,
            api_url: creds
                .optional_secret("api_url")?
                .unwrap_or_else(|| PUSHOVER_API_URL.to_string()),
            client,
        })
    }
}

#[async_trait::async_trait]
impl Channel for PushoverChannel {
    async fn send(&self, message: &str) -> Result<DeliveryOutcome, NotifyError> {
        tracing::debug!(url = %self.api_url, "Sending Pushover notification");

        let response = self
            .client
            .post(&self.api_url)
            .query(&[
                ("token", self.api_token.as_str()),
                ("user", self.user_key.as_str()),
                ("message", message),
            ])
            .send()
            .await?;

        Ok(DeliveryOutcome::from_status(response.status()))
    }

    fn channel_name(&self) -> &str {
        "pushover"
    }
}
