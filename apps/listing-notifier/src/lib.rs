#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Listing Notifier - Exchange Listing Watcher
//!
//! Polls an exchange's listing-status endpoint for one ticker symbol
//! until the symbol becomes listed, then fires one-shot notifications
//! through the configured remote channels and emits a repeating desktop
//! notification until the process is stopped.
//!
//! The steady state is intentional: before the listing the process sits
//! quietly in the poll loop, and after it the desktop alert repeats
//! forever. There is no exit condition other than SIGINT/SIGTERM.
//!
//! # Layers (inside -> outside)
//!
//! - **Domain**: Symbol and listing-state types
//! - **Application**: Ports (status source, notification channels) and
//!   the poll/dispatch services
//! - **Infrastructure**: HTTP status client, channel adapters, config
//!   loading, tracing setup
//!
//! # Control Flow
//!
//! ```text
//! poll loop ──(listed)──► one-shot sends (spawned, outcomes collected)
//!                    └───► desktop alert loop (until shutdown)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - Symbol and listing-state types.
pub mod domain;

/// Application layer - Ports and services.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// Domain types
pub use domain::{APPLICATION_NAME, InvalidSymbol, Symbol, WatchState, listing_message};

// Ports
pub use application::ports::{DeliveryError, LocalAlert, Notifier, PollError, StatusSource};

// Services
pub use application::services::{
    AlertLoop, DeliveryOutcome, ListingPoller, WatchOutcome, collect_outcomes, dispatch_one_shot,
};

// Infrastructure
pub use infrastructure::config::{ConfigError, EndpointSettings, Settings, default_config_path};
pub use infrastructure::exchange::StatusClient;
pub use infrastructure::notify::{DesktopAlert, LinePush, SlackWebhook, build_remote_notifiers};
pub use infrastructure::telemetry;
