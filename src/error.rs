//! Clipship Error Types
//!
//! Centralized error handling for the capture-and-submit flow.

use thiserror::Error;

/// Central error type for clipship
///
/// The `Transport` and `Endpoint` messages double as the user-facing
/// notification text, so they carry the full wording.
#[derive(Error, Debug)]
pub enum ClipError {
    #[error("Selection capture failed: {0}")]
    Capture(String),

    #[error("No text selected")]
    EmptySelection,

    #[error("{0}")]
    Transport(String),

    #[error("Invalid response from webhook.")]
    MalformedResponse,

    #[error("{0}")]
    Endpoint(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for clipship operations
pub type ClipResult<T> = Result<T, ClipError>;
