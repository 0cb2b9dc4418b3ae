//! Destination credentials loaded from a JSON file.
//!
//! The file maps a service name to its secrets:
//!
//! ```json
//! {
//!   "pushover": { "api_token": "...", "user_key": "..." },
//!   "slack": { "webhook_url": "${SLACK_WEBHOOK}" },
//!   "discord": { "webhook_url": "https://discord.com/api/webhooks/...", "enabled": false }
//! }
//! ```
//!
//! Secret values may reference environment variables as `${VAR_NAME}`;
//! references are resolved when a secret is read.

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::traits::NotifyError;

/// File name looked up beside the executable.
pub const DEFAULT_CREDS_FILE: &str = "creds.json";

/// Secrets for one service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceCredentials {
    /// Disabled services are skipped entirely.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(flatten)]
    secrets: HashMap<String, String>,
}

fn default_enabled() -> bool {
    true
}

impl ServiceCredentials {
    /// Read a required secret, resolving `${VAR}` references.
    pub fn secret(&self, service: &str, key: &str) -> Result<String, NotifyError> {
        let raw = self
            .secrets
            .get(key)
            .ok_or_else(|| NotifyError::Config(format!("{service}: missing '{key}'")))?;
        let value = resolve_env_vars(raw)?;
        if value.is_empty() {
            return Err(NotifyError::Config(format!(
                "{service}: '{key}' must not be empty"
            )));
        }
        Ok(value)
    }

    /// Read an optional secret. Present-but-unresolvable values are still errors.
    pub fn optional_secret(&self, key: &str) -> Result<Option<String>, NotifyError> {
        self.secrets
            .get(key)
            .map(|raw| resolve_env_vars(raw))
            .transpose()
    }
}

/// Service name to secrets, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credentials {
    services: IndexMap<String, ServiceCredentials>,
}

impl Credentials {
    /// Load credentials from `path`.
    ///
    /// A missing file is [`NotifyError::ConfigurationMissing`]; there are no
    /// default credentials.
    pub fn load(path: &Path) -> Result<Self, NotifyError> {
        if !path.is_file() {
            return Err(NotifyError::ConfigurationMissing {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|e| NotifyError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_json(content: &str) -> Result<Self, NotifyError> {
        serde_json::from_str(content)
            .map_err(|e| NotifyError::Config(format!("invalid credentials: {e}")))
    }

    /// All services, enabled or not.
    pub fn services(&self) -> impl Iterator<Item = (&str, &ServiceCredentials)> {
        self.services.iter().map(|(name, creds)| (name.as_str(), creds))
    }

    pub fn get(&self, service: &str) -> Option<&ServiceCredentials> {
        self.services.get(service)
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Resolve `${VAR_NAME}` patterns in a string using `std::env::var`.
fn resolve_env_vars(input: &str) -> Result<String, NotifyError> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| {
            NotifyError::Config("unclosed env var reference in credential value".to_string())
        })?;
        let var_name = &after[..end];
        let value = std::env::var(var_name)
            .map_err(|_| NotifyError::Config(format!("env var not found: {var_name}")))?;
        result.push_str(&value);
        rest = &after[end + 1..];
    }
    result.push_str(rest);

    Ok(result)
}
