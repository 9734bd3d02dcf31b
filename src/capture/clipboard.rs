//! Clipboard capture via arboard
//!
//! Fallback backend for environments where the live selection cannot be
//! read. Submits whatever was last copied.

use super::SelectionCapture;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct ClipboardCapture;

impl ClipboardCapture {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SelectionCapture for ClipboardCapture {
    async fn selected_text(&self) -> Result<String> {
        let text = tokio::task::spawn_blocking(|| -> Result<String> {
            let mut clipboard = arboard::Clipboard::new()?;
            Ok(clipboard.get_text()?)
        })
        .await??;
        Ok(text)
    }

    fn name(&self) -> &str {
        "clipboard"
    }
}
