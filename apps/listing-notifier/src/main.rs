//! Listing Notifier Binary
//!
//! Watches one ticker symbol and announces its listing.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p listing-notifier
//! ```
//!
//! Reads `config.toml` next to the executable (see
//! [`listing_notifier::Settings`] for the format).
//!
//! # Environment Variables
//!
//! - `LISTING_NOTIFIER_CONFIG`: config file path override
//! - `LISTING_NOTIFIER_LOG`: log file path override
//! - `LISTING_*`: config value overrides (e.g. `LISTING_GENERAL__SYMBOL`)
//! - `RUST_LOG`: log level (default: info)

use std::path::PathBuf;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use listing_notifier::{
    APPLICATION_NAME, AlertLoop, DesktopAlert, ListingPoller, Settings, StatusClient, WatchOutcome,
    build_remote_notifiers, collect_outcomes, default_config_path, dispatch_one_shot,
    listing_message, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    telemetry::init(&telemetry::log_path());

    let settings = Settings::load(&config_path())
        .context("failed to load configuration, refusing to start")?;
    log_config(&settings);

    let shutdown = CancellationToken::new();
    spawn_signal_handler(shutdown.clone());

    let status_client =
        StatusClient::new(&settings.endpoints).context("failed to build status client")?;
    let poller = ListingPoller::new(status_client, settings.poll_interval, shutdown.clone());

    if poller.watch(&settings.symbol).await == WatchOutcome::Cancelled {
        return Ok(());
    }

    let message = listing_message(&settings.endpoints.market_url_base, &settings.symbol);

    // Fire-and-forget remote sends; the collector logs every outcome.
    let notifiers = build_remote_notifiers(&settings)
        .context("failed to build notification channels")?;
    let outcomes = dispatch_one_shot(notifiers, message.clone());
    tokio::spawn(collect_outcomes(outcomes));

    let alert_loop = AlertLoop::new(DesktopAlert::new(), settings.notify_interval, shutdown);
    alert_loop.run(APPLICATION_NAME, &message).await;

    Ok(())
}

/// Resolve the config file path: env override, else next to the executable.
fn config_path() -> PathBuf {
    std::env::var("LISTING_NOTIFIER_CONFIG").map_or_else(|_| default_config_path(), PathBuf::from)
}

/// Load .env from the current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration. Credentials are reduced to presence flags.
fn log_config(settings: &Settings) {
    tracing::info!(
        symbol = %settings.symbol,
        poll_interval_secs = settings.poll_interval.as_secs(),
        notify_interval_secs = settings.notify_interval.as_secs(),
        slack_configured = settings.slack_webhook_url.is_some(),
        line_configured = settings.line_token.is_some(),
        status_url = %settings.endpoints.status_url,
        "Configuration loaded"
    );
}

/// Cancel the shutdown token on SIGTERM or SIGINT.
#[allow(clippy::expect_used)]
fn spawn_signal_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("signal handler installation is critical for graceful shutdown");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("SIGTERM handler installation is critical for graceful shutdown")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            () = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating shutdown");
            }
            () = terminate => {
                tracing::info!("Received SIGTERM, initiating shutdown");
            }
        }

        shutdown.cancel();
    });
}
