pub mod mock_capture;
pub mod mock_notify;
pub mod webhook_server;

use clipship::config::Config;
use clipship::submitter::Submitter;
use clipship::webhook::WebhookClient;
use std::sync::Arc;

use self::mock_capture::MockCapture;
use self::mock_notify::MockNotifier;

/// Wire a submitter from mock collaborators and a webhook URL
pub fn build_submitter(
    webhook_url: &str,
    capture: Arc<MockCapture>,
    notifier: Arc<MockNotifier>,
) -> Submitter {
    let mut config = Config::default();
    config.webhook_url = webhook_url.to_string();
    config.request_timeout = 5;

    let webhook = Arc::new(WebhookClient::new(&config).expect("Failed to build webhook client"));
    Submitter::new(capture, webhook, notifier)
}
