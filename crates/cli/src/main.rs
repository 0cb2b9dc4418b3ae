mod cli;
mod config;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use sabnotify_notify::{Credentials, DeliveryLog, Dispatcher, Relay, RunOutcome};

use crate::cli::CliArgs;
use crate::config::RelayPaths;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Console diagnostics only; delivery lines go to the DeliveryLog.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let paths = RelayPaths::resolve(&args)?;

    // Missing credentials abort before the log is opened or anything is sent.
    let credentials = Credentials::load(&paths.creds)?;

    let log = DeliveryLog::open(&paths.log_file)
        .with_context(|| format!("failed to open log file: {}", paths.log_file.display()))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()
        .context("failed to build HTTP client")?;

    let dispatcher = Dispatcher::from_credentials(&credentials, &client, log)
        .with_context(|| format!("invalid credentials in {}", paths.creds.display()))?;

    let invocation = args.invocation();
    let relay = Relay::new(dispatcher);

    match relay.run(&invocation).await {
        RunOutcome::Suppressed => {
            info!(classification = %invocation.classification, "Message suppressed");
        }
        RunOutcome::Delivered(results) => {
            for (channel, result) in &results {
                if result.success {
                    info!(%channel, status = ?result.status, "Delivered");
                } else {
                    warn!(%channel, status = ?result.status, reason = %result.reason, "Delivery failed");
                }
            }
        }
    }

    Ok(())
}
