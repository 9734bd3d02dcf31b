//! Selection Submitter
//!
//! The capture-and-submit flow behind every trigger: read the selection,
//! trim it, post it to the webhook, and surface exactly one notification
//! for the terminal outcome. Each trigger runs to completion independently;
//! overlapping triggers are neither serialized nor deduplicated.

use crate::capture::SelectionCapture;
use crate::error::{ClipError, ClipResult};
use crate::notify::Notifier;
use crate::webhook::{Submission, WebhookClient};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a capture came from: the origin string is sent as `website`
#[derive(Debug, Clone)]
pub struct CaptureContext {
    pub origin: String,
}

/// Terminal outcome of one trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Selection accepted by the endpoint
    Saved,
    /// Nothing selected; no request was made
    NoSelection,
    /// The selection could not be read; no request was made
    CaptureFailed,
    /// The request failed, or the endpoint rejected the submission
    SubmitFailed,
}

#[derive(Clone)]
pub struct Submitter {
    capture: Arc<dyn SelectionCapture>,
    webhook: Arc<WebhookClient>,
    notifier: Arc<dyn Notifier>,
}

impl Submitter {
    pub fn new(
        capture: Arc<dyn SelectionCapture>,
        webhook: Arc<WebhookClient>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            capture,
            webhook,
            notifier,
        }
    }

    /// Run the full flow for one trigger and report the outcome
    pub async fn handle_trigger(&self, ctx: CaptureContext) -> Outcome {
        debug!("Trigger received (origin: '{}')", ctx.origin);

        match self.capture_and_submit(&ctx).await {
            Ok(chars) => {
                info!("Saved {} chars from '{}'", chars, ctx.origin);
                self.notify("Success", "Selection saved successfully.").await;
                Outcome::Saved
            }
            Err(ClipError::EmptySelection) => {
                info!("Nothing selected, skipping submission");
                self.notify(
                    "No Text Selected",
                    "Please select some text before saving.",
                )
                .await;
                Outcome::NoSelection
            }
            Err(e @ ClipError::Capture(_)) => {
                warn!("{}", e);
                self.notify("Error", "Failed to retrieve selected text.").await;
                Outcome::CaptureFailed
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                self.notify("Error", &e.to_string()).await;
                Outcome::SubmitFailed
            }
        }
    }

    /// The two suspension points, in order: capture, then submit
    async fn capture_and_submit(&self, ctx: &CaptureContext) -> ClipResult<usize> {
        let raw = self
            .capture
            .selected_text()
            .await
            .map_err(|e| ClipError::Capture(e.to_string()))?;

        let text = raw.trim();
        if text.is_empty() {
            return Err(ClipError::EmptySelection);
        }

        let submission = Submission {
            text: text.to_string(),
            website: ctx.origin.clone(),
        };
        self.webhook.submit(&submission).await?;
        Ok(submission.text.chars().count())
    }

    /// Best-effort: a notification that fails to display is logged, never escalated
    async fn notify(&self, title: &str, message: &str) {
        if let Err(e) = self.notifier.notify(title, message).await {
            warn!("Notification failed: {}", e);
        }
    }
}
