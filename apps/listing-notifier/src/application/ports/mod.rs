//! Port Interfaces
//!
//! Contracts that infrastructure adapters implement, following the
//! Hexagonal Architecture pattern.
//!
//! ## Driven Ports (Outbound)
//!
//! - [`StatusSource`]: queries the exchange's listing-status endpoint
//! - [`Notifier`]: delivers a one-shot message over a remote channel
//! - [`LocalAlert`]: raises a desktop notification

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Symbol;

/// Error from a single poll attempt.
///
/// Every variant is recoverable: the poller logs it and treats the
/// iteration as "not listed".
#[derive(Debug, Error)]
pub enum PollError {
    /// The status endpoint was unreachable or the request timed out.
    #[error("status endpoint unreachable: {0}")]
    Network(String),
    /// The status endpoint returned a non-2xx response.
    #[error("status endpoint returned HTTP {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("malformed status response: {0}")]
    Parse(String),
}

/// Error from a notification channel.
///
/// Recoverable: logged by the outcome collector, never aborts other
/// channels.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The channel endpoint was unreachable or the request timed out.
    #[error("channel unreachable: {0}")]
    Network(String),
    /// The channel endpoint returned a non-200 response.
    #[error("channel returned HTTP {0}")]
    Status(u16),
    /// The platform notification center rejected the alert.
    #[error("desktop notification failed: {0}")]
    Desktop(String),
}

/// Source of listing status for a symbol.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Check whether the symbol is currently listed.
    async fn is_listed(&self, symbol: &Symbol) -> Result<bool, PollError>;
}

/// A remote notification channel with a uniform one-shot send contract.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short channel name used in log fields.
    fn channel(&self) -> &'static str;

    /// Attempt delivery of the message exactly once.
    async fn send(&self, message: &str) -> Result<(), DeliveryError>;
}

/// Local desktop notification sink.
pub trait LocalAlert: Send + Sync {
    /// Raise a desktop notification. Best-effort, synchronous.
    fn alert(&self, title: &str, body: &str) -> Result<(), DeliveryError>;
}
