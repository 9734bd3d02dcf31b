//! Mock notifier for testing
//!
//! Records every notification for verification.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct MockNotifier {
    /// All (title, message) pairs shown
    pub shown: Arc<Mutex<Vec<(String, String)>>>,
    /// Simulate a display failure
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            shown: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        })
    }

    pub fn notifications(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }

    /// Check whether any notification message contains the text
    pub fn was_notified(&self, needle: &str) -> bool {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .any(|(_, message)| message.contains(needle))
    }
}

#[async_trait]
impl clipship::notify::Notifier for MockNotifier {
    async fn notify(&self, title: &str, message: &str) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock notifier failure"));
        }
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
