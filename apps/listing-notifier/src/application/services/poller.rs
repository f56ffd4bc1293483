//! Listing Poller
//!
//! Repeatedly queries a [`StatusSource`] until the watched symbol is
//! reported as listed, then hands control back to the caller.
//!
//! # Wait policy
//!
//! Every non-success outcome waits the configured poll interval before the
//! next attempt. That covers "not listed yet" as well as network errors,
//! non-2xx responses, and parse failures: a flapping endpoint is polled at
//! the same rate as a healthy one.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ports::StatusSource;
use crate::domain::{Symbol, WatchState};

/// Terminal result of a watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The exchange reported the symbol as listed.
    Listed,
    /// Shutdown was requested before the symbol was listed.
    Cancelled,
}

/// Polls a status source until the symbol is listed or shutdown is
/// requested.
#[derive(Debug)]
pub struct ListingPoller<S> {
    source: S,
    poll_interval: Duration,
    shutdown: CancellationToken,
}

impl<S: StatusSource> ListingPoller<S> {
    /// Create a poller over a status source.
    pub const fn new(source: S, poll_interval: Duration, shutdown: CancellationToken) -> Self {
        Self {
            source,
            poll_interval,
            shutdown,
        }
    }

    /// Block until the symbol is listed or the shutdown token cancels.
    ///
    /// Runs indefinitely; there is no maximum attempt count. Poll errors
    /// are logged and treated as "not listed" for that iteration.
    pub async fn watch(&self, symbol: &Symbol) -> WatchOutcome {
        let mut state = WatchState::Polling;
        let mut attempts: u64 = 0;

        while state == WatchState::Polling {
            attempts += 1;
            match self.source.is_listed(symbol).await {
                Ok(true) => {
                    state = WatchState::Listed;
                    continue;
                }
                Ok(false) => {
                    tracing::debug!(symbol = %symbol, attempts, "symbol not listed yet");
                }
                Err(e) => {
                    tracing::warn!(symbol = %symbol, attempts, error = %e, "poll attempt failed");
                }
            }

            tokio::select! {
                () = self.shutdown.cancelled() => {
                    tracing::info!(symbol = %symbol, attempts, "watch cancelled");
                    return WatchOutcome::Cancelled;
                }
                () = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        tracing::info!(symbol = %symbol, attempts, "symbol listed");
        WatchOutcome::Listed
    }
}
