//! Mock selection capture for testing
//!
//! Returns a scripted selection string and counts how often it is asked.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct MockCapture {
    /// The selection the next call returns
    pub text: Arc<Mutex<String>>,
    /// Simulate a capability failure
    pub should_fail: Arc<Mutex<bool>>,
    /// Number of capture calls made
    pub calls: Arc<Mutex<usize>>,
}

impl MockCapture {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: Arc::new(Mutex::new(text.to_string())),
            should_fail: Arc::new(Mutex::new(false)),
            calls: Arc::new(Mutex::new(0)),
        })
    }

    pub fn failing() -> Arc<Self> {
        let mock = Self::returning("");
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl clipship::capture::SelectionCapture for MockCapture {
    async fn selected_text(&self) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock capture failure"));
        }
        Ok(self.text.lock().unwrap().clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
