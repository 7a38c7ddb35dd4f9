//! Delivery seam and the HTTP notifier

use crate::config::DispatchConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Delivers one serialized payload to one endpoint
///
/// Implementations are fire-and-forget: failures are logged, never
/// surfaced. Tests substitute a recording stub for real network calls.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Attempt delivery of `body` to `url`
    async fn notify(&self, url: &str, body: &[u8]);
}

/// Notifier that POSTs payloads over HTTPS
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: Client,
}

impl HttpNotifier {
    /// Create a notifier from the dispatch configuration
    pub fn new(config: &DispatchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn notify(&self, url: &str, body: &[u8]) {
        let result = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_vec())
            .send()
            .await;

        // No retry and no propagation: the receiving automation platform
        // reports its own delivery failures to its owner.
        match result {
            Ok(response) => debug!(status = %response.status(), "webhook POST completed"),
            Err(e) => warn!("webhook POST failed: {}", e),
        }
    }
}

/// Notifier that records deliveries instead of performing them
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    calls: std::sync::Mutex<Vec<(String, Vec<u8>)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|(url, _)| url).collect()
    }
}

#[cfg(test)]
#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, url: &str, body: &[u8]) {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), body.to_vec()));
    }
}
