//! Clipship - Selection to Webhook for the Linux Desktop
//!
//! Resident agent that saves the current text selection to a configured
//! webhook on a global hotkey press.

use anyhow::Result;
use clap::Parser;
use clipship::capture;
use clipship::config::{self, Config};
use clipship::notify;
use clipship::submitter::{CaptureContext, Outcome, Submitter};
use clipship::trigger::{self, Hotkey};
use clipship::webhook::WebhookClient;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Capture and submit the current selection once, then exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("📎 clipship v{} starting...", env!("CARGO_PKG_VERSION"));

    if config.webhook_url.is_empty() {
        anyhow::bail!(
            "webhook_url is not configured; set it in {}",
            config::config_path().display()
        );
    }

    let capture = capture::create_capture(&config);
    let notifier = notify::create_notifier(&config);
    let webhook = Arc::new(WebhookClient::new(&config)?);
    let submitter = Submitter::new(capture, webhook, notifier);

    if args.once {
        let ctx = CaptureContext {
            origin: trigger::resolve_origin(&config),
        };
        let outcome = submitter.handle_trigger(ctx).await;
        if matches!(outcome, Outcome::CaptureFailed | Outcome::SubmitFailed) {
            anyhow::bail!("Submission did not complete: {:?}", outcome);
        }
        return Ok(());
    }

    let hotkey = Hotkey::parse(&config.hotkey)?;
    let mut triggers = trigger::start_listener(hotkey);

    info!(
        "✅ clipship ready - press {} to save the current selection",
        config.hotkey
    );

    // Each trigger runs as its own task; overlapping triggers are independent
    while let Some(_event) = triggers.recv().await {
        let submitter = submitter.clone();
        let config = config.clone();
        tokio::spawn(async move {
            let ctx = CaptureContext {
                origin: trigger::resolve_origin(&config),
            };
            submitter.handle_trigger(ctx).await;
        });
    }

    Ok(())
}
