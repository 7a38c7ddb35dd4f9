//! Configuration for the dispatcher

use crate::schedule::DEFAULT_LEAD_TIME;
use std::time::Duration;

/// Configuration for dispatch and delivery
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Timeout for each webhook request
    pub timeout: Duration,

    /// User-Agent header for outgoing requests
    pub user_agent: String,

    /// Whether to verify TLS certificates
    pub verify_tls: bool,

    /// Minimum lead time between "now" and the publish time reported to
    /// receivers, so downstream automation has time to process the post
    pub lead_time: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(45),
            user_agent: format!("Simple-Posting/{}", env!("CARGO_PKG_VERSION")),
            verify_tls: true,
            lead_time: DEFAULT_LEAD_TIME,
        }
    }
}

impl DispatchConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> DispatchConfigBuilder {
        DispatchConfigBuilder::new()
    }
}

/// Builder for DispatchConfig
#[derive(Debug, Clone, Default)]
pub struct DispatchConfigBuilder {
    config: DispatchConfig,
}

impl DispatchConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: DispatchConfig::default(),
        }
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set TLS certificate verification
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Set the schedule lead time
    pub fn lead_time(mut self, lead_time: Duration) -> Self {
        self.config.lead_time = lead_time;
        self
    }

    /// Set the schedule lead time in minutes
    pub fn lead_time_mins(mut self, mins: u64) -> Self {
        self.config.lead_time = Duration::from_secs(mins * 60);
        self
    }

    /// Build the configuration
    pub fn build(self) -> DispatchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(45));
        assert!(config.verify_tls);
        assert_eq!(config.lead_time, Duration::from_secs(300));
    }

    #[test]
    fn test_builder() {
        let config = DispatchConfig::builder()
            .timeout_secs(10)
            .verify_tls(false)
            .lead_time_mins(2)
            .user_agent("test-agent")
            .build();

        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.verify_tls);
        assert_eq!(config.lead_time, Duration::from_secs(120));
        assert_eq!(config.user_agent, "test-agent");
    }
}
