//! Webhook Client
//!
//! Posts captured selections to the configured endpoint and interprets its
//! reply. The endpoint contract is deliberately loose: any JSON body with a
//! string `status` field is accepted, everything else is malformed.

use crate::config::Config;
use crate::error::{ClipError, ClipResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// The payload sent to the endpoint, built fresh per trigger
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub text: String,
    pub website: String,
}

#[derive(Debug, Deserialize)]
struct WebhookReply {
    status: String,
    message: Option<String>,
}

/// HTTP client for the configured webhook endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
    success_status: String,
}

impl WebhookClient {
    pub fn new(config: &Config) -> ClipResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| ClipError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.webhook_url.clone(),
            success_status: config.success_status.clone(),
        })
    }

    /// Submit one selection. One POST, no retries.
    pub async fn submit(&self, submission: &Submission) -> ClipResult<()> {
        debug!("POST {} ({} chars)", self.url, submission.text.len());

        let response = self
            .client
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| ClipError::Transport(format!("Network request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClipError::Transport(format!(
                "Network response was not ok. Status: {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClipError::Transport(format!("Network request failed: {e}")))?;

        let reply: WebhookReply = match serde_json::from_str(&body) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Failed to deserialize webhook response: {} - Body: {}", e, body);
                return Err(ClipError::MalformedResponse);
            }
        };

        if reply.status == self.success_status {
            debug!("Webhook accepted submission");
            Ok(())
        } else {
            Err(ClipError::Endpoint(
                reply.message.unwrap_or_else(|| "Unknown error.".to_string()),
            ))
        }
    }
}
