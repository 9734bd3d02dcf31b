//! Selection Capture Module
//!
//! Provides a unified interface for reading the focused application's
//! current text selection.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod clipboard;
pub mod primary;

/// Trait for selection capture backends
#[async_trait]
pub trait SelectionCapture: Send + Sync + std::fmt::Debug {
    /// Read the current text selection, untrimmed
    async fn selected_text(&self) -> Result<String>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Factory to create the configured capture backend
pub fn create_capture(config: &Config) -> Arc<dyn SelectionCapture> {
    let backend: Arc<dyn SelectionCapture> = match config.capture_backend.as_str() {
        "selection" => Arc::new(primary::PrimaryCapture::new()),
        "clipboard" => Arc::new(clipboard::ClipboardCapture::new()),
        other => {
            warn!("Unknown capture backend '{}', falling back to selection", other);
            Arc::new(primary::PrimaryCapture::new())
        }
    };
    info!("Capture backend '{}' initialized", backend.name());
    backend
}
