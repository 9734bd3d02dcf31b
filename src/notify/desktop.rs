//! Desktop notifications via notify-rust (libnotify / freedesktop)

use super::Notifier;
use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use notify_rust::{Notification, Timeout};
use tracing::debug;

const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    icon: String,
}

impl DesktopNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            icon: config.notify_icon.clone(),
        }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, title: &str, message: &str) -> Result<()> {
        let mut notification = Notification::new();
        notification
            .summary(title)
            .body(message)
            .icon(&self.icon)
            .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS));

        // show() blocks on the D-Bus round trip; the handle stays on the
        // blocking thread, only its id comes back
        let id = tokio::task::spawn_blocking(move || notification.show().map(|n| n.id()))
            .await??;
        debug!("Notification shown: {}", id);
        Ok(())
    }

    fn name(&self) -> &str {
        "desktop"
    }
}
