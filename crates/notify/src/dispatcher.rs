//! Routes a composed message to every configured channel.
//!
//! Channels are called one after another. Individual channel failures
//! don't block other channels, and nothing is retried.

use indexmap::IndexMap;

use crate::credentials::{Credentials, ServiceCredentials};
use crate::log::DeliveryLog;
use crate::pushover::PushoverChannel;
use crate::traits::{Channel, DeliveryResult, NotifyError};
use crate::webhook::WebhookChannel;

/// Build the channel for a named service.
fn channel_for(
    name: &str,
    creds: &ServiceCredentials,
    client: &reqwest::Client,
) -> Result<Box<dyn Channel>, NotifyError> {
    let channel: Box<dyn Channel> = match name {
        "pushover" => Box::new(PushoverChannel::from_credentials(creds, client.clone())?),
        "slack" => Box::new(WebhookChannel::slack(creds, client.clone())?),
        "discord" => Box::new(WebhookChannel::discord(creds, client.clone())?),
        other => return Err(NotifyError::UnsupportedDestination(other.to_string())),
    };
    Ok(channel)
}

/// Dispatches one message to a fixed list of channels.
pub struct Dispatcher {
    channels: Vec<Box<dyn Channel>>,
    log: DeliveryLog,
}

impl Dispatcher {
    pub fn new(channels: Vec<Box<dyn Channel>>, log: DeliveryLog) -> Self {
        Self { channels, log }
    }

    /// Build one channel per enabled service in `credentials`.
    ///
    /// Fails on the first unknown service name or missing secret, before
    /// any request is made.
    pub fn from_credentials(
        credentials: &Credentials,
        client: &reqwest::Client,
        log: DeliveryLog,
    ) -> Result<Self, NotifyError> {
        let mut channels = Vec::new();
        for (name, creds) in credentials.services() {
            if !creds.enabled {
                tracing::debug!(channel = name, "Channel disabled, skipping");
                continue;
            }
            channels.push(channel_for(name, creds, client)?);
        }
        Ok(Self::new(channels, log))
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.channel_name()).collect()
    }

    pub fn log(&self) -> &DeliveryLog {
        &self.log
    }

    /// Send `message` to every channel, then log each result.
    ///
    /// Results are keyed by channel name in dispatch order.
    pub async fn dispatch(&self, message: &str) -> IndexMap<String, DeliveryResult> {
        if self.channels.is_empty() {
            tracing::warn!("No notification channels configured");
            return IndexMap::new();
        }

        let mut results = IndexMap::with_capacity(self.channels.len());

        for channel in &self.channels {
            let name = channel.channel_name();
            let start = std::time::Instant::now();
            let sent = channel.send(message).await;
            let duration_ms = start.elapsed().as_millis() as u64;

            let result = match sent {
                Ok(outcome) => DeliveryResult::from_outcome(name, outcome, duration_ms),
                Err(e) => DeliveryResult::from_error(name, &e, duration_ms),
            };
            results.insert(name.to_string(), result);
        }

        for result in results.values() {
            self.log.record(result);
        }

        results
    }
}
