//! Notification Module
//!
//! Surfaces every terminal outcome of a trigger to the user. Display
//! failures are the caller's problem to swallow; nothing here retries.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod desktop;
pub mod quiet;

/// Trait for notification backends
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Display a notification with a short title and message
    async fn notify(&self, title: &str, message: &str) -> Result<()>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Factory to create the configured notifier
pub fn create_notifier(config: &Config) -> Arc<dyn Notifier> {
    let notifier: Arc<dyn Notifier> = match config.notifier.as_str() {
        "desktop" => Arc::new(desktop::DesktopNotifier::new(config)),
        "quiet" => Arc::new(quiet::QuietNotifier::new()),
        other => {
            warn!("Unknown notifier '{}', falling back to desktop", other);
            Arc::new(desktop::DesktopNotifier::new(config))
        }
    };
    info!("Notifier '{}' initialized", notifier.name());
    notifier
}
