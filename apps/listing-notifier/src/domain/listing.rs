//! Listing Domain Types
//!
//! A watched symbol starts in `Polling` and transitions to `Listed` exactly
//! once, when the exchange first reports it as tradeable. `Listed` is
//! terminal: ownership of further action passes to notification dispatch.

use thiserror::Error;

/// Application name used as the desktop notification title.
pub const APPLICATION_NAME: &str = "Listing Notifier";

/// A ticker symbol, validated non-empty and normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

/// Error for an empty or whitespace-only ticker code.
#[derive(Debug, Error)]
#[error("symbol must be a non-empty ticker code")]
pub struct InvalidSymbol;

impl Symbol {
    /// Create a symbol from a raw ticker code.
    ///
    /// Exchanges are inconsistent about case, so the code is upper-cased
    /// here once rather than at every call site.
    pub fn new(raw: &str) -> Result<Self, InvalidSymbol> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidSymbol);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Get the normalized ticker code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Poller state for a watched symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Waiting for the exchange to report the symbol as listed.
    Polling,
    /// The exchange reported the symbol as listed. Terminal.
    Listed,
}

/// Build the announcement message for a freshly listed symbol.
///
/// Points at the symbol's market page; markets are quoted against BTC.
#[must_use]
pub fn listing_message(market_url_base: &str, symbol: &Symbol) -> String {
    format!("{market_url_base}/{symbol}/BTC")
}
