//! Notification relay for download-tool post-processing hooks.
//!
//! This crate provides:
//! - `Channel` trait for pluggable notification destinations
//! - Pushover, Slack and Discord channel implementations
//! - Classification titles, message composition and noise filtering
//! - Dispatcher that sends one message to every configured channel
//! - An explicit append-only delivery log

pub mod catalog;
pub mod credentials;
pub mod dispatcher;
pub mod filter;
pub mod log;
pub mod pushover;
pub mod relay;
pub mod traits;
pub mod webhook;

pub use catalog::{compose, Invocation};
pub use credentials::Credentials;
pub use dispatcher::Dispatcher;
pub use filter::should_ignore;
pub use log::DeliveryLog;
pub use relay::{Relay, RunOutcome};
pub use traits::{Channel, DeliveryOutcome, DeliveryResult, NotifyError};
