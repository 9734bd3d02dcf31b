//! Log-only notifier for headless or scripted use

use super::Notifier;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

#[derive(Debug, Default)]
pub struct QuietNotifier;

impl QuietNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for QuietNotifier {
    async fn notify(&self, title: &str, message: &str) -> Result<()> {
        info!("[{}] {}", title, message);
        Ok(())
    }

    fn name(&self) -> &str {
        "quiet"
    }
}
