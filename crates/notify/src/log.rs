//! Append-only delivery log.
//!
//! [`DeliveryLog`] owns its own `tracing` dispatcher instead of relying on a
//! global subscriber, so callers construct it explicitly and hand it to the
//! [`Dispatcher`](crate::Dispatcher). Lines look like:
//!
//! ```text
//! 2024-05-01 12:00:00 [INFO] notification delivered channel=pushover status=200 reason=OK duration_ms=412
//! ```

use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use crate::traits::{DeliveryResult, NotifyError};

/// File name written beside the executable.
pub const DEFAULT_LOG_FILE: &str = "notify.log";

/// `<timestamp> [<LEVEL>] <message>` event format.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(writer, "{now} [{}] ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Leveled sink for per-destination outcomes.
#[derive(Clone)]
pub struct DeliveryLog {
    dispatch: Dispatch,
}

impl DeliveryLog {
    /// Open `path` in append mode, creating it if needed.
    pub fn open(path: &Path) -> Result<Self, NotifyError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_writer(Mutex::new(file)))
    }

    pub fn with_writer<W>(make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(make_writer)
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .event_format(LineFormat)
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// A log that discards everything.
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Record one destination's result: INFO on 2xx, WARN on any other
    /// status, ERROR when no response arrived.
    pub fn record(&self, result: &DeliveryResult) {
        tracing::dispatcher::with_default(&self.dispatch, || match (result.success, result.status) {
            (true, Some(status)) => tracing::info!(
                channel = %result.channel,
                status,
                reason = %result.reason,
                duration_ms = result.duration_ms,
                "notification delivered"
            ),
            (_, Some(status)) => tracing::warn!(
                channel = %result.channel,
                status,
                reason = %result.reason,
                duration_ms = result.duration_ms,
                "notification rejected"
            ),
            (_, None) => tracing::error!(
                channel = %result.channel,
                reason = %result.reason,
                duration_ms = result.duration_ms,
                "notification delivery failed"
            ),
        });
    }

    pub fn suppressed(&self, classification: &str, body: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::info!(classification, body, "notification suppressed")
        });
    }
}
