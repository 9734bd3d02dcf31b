//! Live selection capture via the `selection` crate
//!
//! Reads whatever text is currently highlighted in the focused application
//! (the primary selection on X11, UI Automation on Windows).

use super::SelectionCapture;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct PrimaryCapture;

impl PrimaryCapture {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SelectionCapture for PrimaryCapture {
    async fn selected_text(&self) -> Result<String> {
        // selection::get_text() is synchronous
        let text = tokio::task::spawn_blocking(selection::get_text).await?;
        Ok(text)
    }

    fn name(&self) -> &str {
        "selection"
    }
}
