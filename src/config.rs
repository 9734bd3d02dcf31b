use crate::error::ClipResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Endpoint
    pub webhook_url: String,
    pub success_status: String,
    pub request_timeout: u64,

    // Trigger
    pub hotkey: String,

    // Capture
    pub capture_backend: String,
    pub source_label: String,

    // Notifications
    pub notifier: String,
    pub notify_icon: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: "".to_string(),
            success_status: "success".to_string(),
            request_timeout: 10,
            hotkey: "ctrl+shift+s".to_string(),
            capture_backend: "selection".to_string(),
            source_label: "".to_string(),
            notifier: "desktop".to_string(),
            notify_icon: "document-save".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from file, or create and persist the default
    pub fn load() -> ClipResult<Self> {
        Self::load_from(&config_path())
    }

    /// Save config to file
    pub fn save(&self) -> ClipResult<()> {
        self.save_to(&config_path())
    }

    fn load_from(path: &Path) -> ClipResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = path.with_extension("json.corrupt");
                    let _ = std::fs::rename(path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            // First run: write the default so the user has a file to edit
            let config = Self::default();
            let _ = config.save_to(path);
            Ok(config)
        }
    }

    fn save_to(&self, path: &Path) -> ClipResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clipship")
        .join("config.json")
}
