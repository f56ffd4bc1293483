//! Desktop notification sink.
//!
//! Cross-platform notification-center alerts via `notify-rust`.
//! Best-effort: a platform error is reported to the caller, which logs it
//! and keeps going.

use crate::application::ports::{DeliveryError, LocalAlert};

/// Notification-center alert sink.
#[derive(Debug, Clone, Default)]
pub struct DesktopAlert;

impl DesktopAlert {
    /// Create a desktop alert sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LocalAlert for DesktopAlert {
    fn alert(&self, title: &str, body: &str) -> Result<(), DeliveryError> {
        notify_rust::Notification::new()
            .summary(title)
            .body(body)
            .show()
            .map(|_| ())
            .map_err(|e| DeliveryError::Desktop(e.to_string()))
    }
}
