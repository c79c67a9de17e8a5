//! Mock transport for upload tests.

use std::time::Duration;

use async_trait::async_trait;
use dtc_errors::TransportError;
use dtc_upload::Transport;
use parking_lot::Mutex;

/// Records every payload it is asked to send.
///
/// Can be told to fail every send or to stall before completing, which is
/// how timeout handling is exercised with a paused tokio clock.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<String>>,
    failure: Option<TransportError>,
    delay: Option<Duration>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails with `error`, after being recorded.
    pub fn failing(error: TransportError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    /// Every send sleeps for `delay_ms` before succeeding.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay: Some(Duration::from_millis(delay_ms)),
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn last_sent(&self) -> Option<String> {
        self.sent.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, payload: &str) -> Result<(), TransportError> {
        self.sent.lock().push(payload.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
