use crate::cache::{ContentCache, Fingerprinter};
use crate::client::core::ContentClient;
use crate::config::ClientConfig;
use crate::resilience::{RateLimiter, RateLimiterConfig};
use crate::transport::{CompletionTransport, HttpTransport};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable. Without an API key the
/// built client runs in permanent fallback mode, which is a supported
/// configuration, not an error.
pub struct ContentClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn CompletionTransport>>,
}

impl ContentClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            transport: None,
        }
    }

    /// Start from an explicit configuration struct.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.config.cache_ttl = ttl;
        self
    }

    /// Upstream call budget per minute. Zero disables pacing.
    pub fn requests_per_minute(mut self, rpm: f64) -> Self {
        self.config.requests_per_minute = rpm;
        self
    }

    pub fn upstream_timeout(mut self, timeout: Duration) -> Self {
        self.config.upstream_timeout = timeout;
        self
    }

    /// Override the upstream base URL.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Inject a transport, bypassing HTTP construction entirely.
    ///
    /// Tests use this to script upstream replies without a server.
    pub fn transport(mut self, transport: Arc<dyn CompletionTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ContentClient> {
        let limiter_cfg = RateLimiterConfig::from_rpm(self.config.requests_per_minute)
            .ok_or_else(|| Error::configuration("requests_per_minute must be finite and >= 0"))?;

        let transport: Option<Arc<dyn CompletionTransport>> = match self.transport {
            Some(t) => Some(t),
            None => match self.config.api_key {
                Some(ref key) if !key.is_empty() => Some(Arc::new(HttpTransport::new(
                    key.clone(),
                    self.config.base_url.clone(),
                    self.config.model.clone(),
                    self.config.upstream_timeout,
                )?)),
                _ => None,
            },
        };

        Ok(ContentClient {
            cache: ContentCache::new(self.config.cache_ttl),
            fingerprinter: Fingerprinter::new(),
            limiter: RateLimiter::new(limiter_cfg),
            transport,
        })
    }
}

impl Default for ContentClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
