//! Notifier Dispatch
//!
//! One-shot fan-out at the listing transition, plus the repeating local
//! alert loop that runs until shutdown.
//!
//! Each remote channel is an independent spawned task; one channel failing
//! must not prevent, delay, or be implied by another's success. Task
//! results flow through an mpsc channel so the collector (or a test) can
//! observe every outcome - nothing is silently dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{DeliveryError, LocalAlert, Notifier};

/// Result of one channel's one-shot send.
#[derive(Debug)]
pub struct DeliveryOutcome {
    /// Channel name, as reported by [`Notifier::channel`].
    pub channel: &'static str,
    /// Whether delivery succeeded.
    pub result: Result<(), DeliveryError>,
}

/// Fire one independent send task per channel.
///
/// Returns the receiving end of the outcome channel. The sender side is
/// dropped once every task has reported, so draining the receiver to
/// completion awaits all sends deterministically.
pub fn dispatch_one_shot(
    notifiers: Vec<Arc<dyn Notifier>>,
    message: String,
) -> mpsc::Receiver<DeliveryOutcome> {
    let (tx, rx) = mpsc::channel(notifiers.len().max(1));

    for notifier in notifiers {
        let tx = tx.clone();
        let message = message.clone();
        tokio::spawn(async move {
            let result = notifier.send(&message).await;
            let _ = tx
                .send(DeliveryOutcome {
                    channel: notifier.channel(),
                    result,
                })
                .await;
        });
    }

    rx
}

/// Drain the outcome channel, logging each delivery result.
pub async fn collect_outcomes(mut rx: mpsc::Receiver<DeliveryOutcome>) {
    while let Some(outcome) = rx.recv().await {
        match outcome.result {
            Ok(()) => {
                tracing::info!(channel = outcome.channel, "one-shot notification delivered");
            }
            Err(e) => {
                tracing::error!(
                    channel = outcome.channel,
                    error = %e,
                    "one-shot notification failed"
                );
            }
        }
    }
}

/// Repeating local desktop alert, cancellable via shutdown token.
#[derive(Debug)]
pub struct AlertLoop<A> {
    alert: A,
    notify_interval: Duration,
    shutdown: CancellationToken,
}

impl<A: LocalAlert> AlertLoop<A> {
    /// Create an alert loop over a local notification sink.
    pub const fn new(alert: A, notify_interval: Duration, shutdown: CancellationToken) -> Self {
        Self {
            alert,
            notify_interval,
            shutdown,
        }
    }

    /// Fire a desktop alert now and then once per interval, forever.
    ///
    /// Platform errors are logged and the loop continues. Returns only
    /// when the shutdown token cancels.
    pub async fn run(&self, title: &str, body: &str) {
        let mut ticker = tokio::time::interval(self.notify_interval);

        loop {
            tokio::select! {
                () = self.shutdown.cancelled() => {
                    tracing::info!("alert loop stopped");
                    return;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.alert.alert(title, body) {
                        tracing::error!(error = %e, "local notification failed");
                    }
                }
            }
        }
    }
}
