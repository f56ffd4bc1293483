//! Tracing Setup
//!
//! Initializes the tracing subscriber with two layers:
//!
//! - a human-readable console layer
//! - a JSON layer appending one event per line to the log file next to
//!   the executable (append-only, no rotation)
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directive for both layers (default: `info`)
//! - `LISTING_NOTIFIER_LOG`: log file path override

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Resolve the log file path: env override, else next to the executable.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::var("LISTING_NOTIFIER_LOG").map_or_else(
        |_| crate::infrastructure::config::settings::executable_dir().join("listing-notifier.log"),
        PathBuf::from,
    )
}

/// Initialize tracing with console and JSON-file layers.
///
/// If the log file cannot be opened, falls back to console-only logging
/// rather than aborting: losing the file sink should not take the watcher
/// down with it.
pub fn init(log_path: &Path) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = OpenOptions::new().create(true).append(true).open(log_path);

    match file {
        Ok(file) => {
            let json_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Arc::new(file));
            let console_layer = tracing_subscriber::fmt::layer().with_target(false);

            Registry::default()
                .with(env_filter)
                .with(console_layer)
                .with(json_layer)
                .init();

            tracing::info!(path = %log_path.display(), "log file opened");
        }
        Err(e) => {
            tracing_subscriber::fmt().with_env_filter(env_filter).init();

            tracing::warn!(
                path = %log_path.display(),
                error = %e,
                "failed to open log file, console logging only"
            );
        }
    }
}
