//! One notification cycle: compose, filter, dispatch.

use indexmap::IndexMap;

use crate::catalog::Invocation;
use crate::dispatcher::Dispatcher;
use crate::filter::should_ignore;
use crate::traits::DeliveryResult;

/// How an invocation ended. Both variants are normal termination.
#[derive(Debug)]
pub enum RunOutcome {
    /// Body matched the ignore list; no channel was contacted.
    Suppressed,
    /// Every channel was attempted, keyed by channel name.
    Delivered(IndexMap<String, DeliveryResult>),
}

impl RunOutcome {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }

    pub fn failures(&self) -> usize {
        match self {
            Self::Suppressed => 0,
            Self::Delivered(results) => results.values().filter(|r| !r.success).count(),
        }
    }
}

pub struct Relay {
    dispatcher: Dispatcher,
}

impl Relay {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Run a single message through the pipeline.
    pub async fn run(&self, invocation: &Invocation) -> RunOutcome {
        let message = invocation.compose();

        if should_ignore(&invocation.body) {
            tracing::debug!(classification = %invocation.classification, "Message matched ignore list");
            self.dispatcher
                .log()
                .suppressed(&invocation.classification, &invocation.body);
            return RunOutcome::Suppressed;
        }

        RunOutcome::Delivered(self.dispatcher.dispatch(&message).await)
    }
}
