//! Explicit client configuration.
//!
//! Everything the client needs is enumerated here and handed to the builder;
//! nothing reads the environment implicitly at construction time. The one
//! env entry point is [`ClientConfig::from_env`], for callers who want the
//! conventional `COPYFORGE_*` variables.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream credential. `None` puts the client in permanent fallback
    /// mode: no upstream attempts, no rate-limiter interaction.
    pub api_key: Option<String>,
    /// How long a cached result stays fresh.
    pub cache_ttl: Duration,
    /// Upstream call budget per minute. `0` disables pacing.
    pub requests_per_minute: f64,
    /// Per-call timeout on the upstream HTTP client.
    pub upstream_timeout: Duration,
    pub base_url: String,
    pub model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            cache_ttl: Duration::from_secs(3600),
            requests_per_minute: 10.0,
            upstream_timeout: Duration::from_secs(30),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from `COPYFORGE_*` environment variables,
    /// falling back to defaults for anything absent or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("COPYFORGE_API_KEY").ok().filter(|k| !k.is_empty()),
            cache_ttl: env::var("COPYFORGE_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            requests_per_minute: env::var("COPYFORGE_RPM")
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|rpm| rpm.is_finite() && *rpm >= 0.0)
                .unwrap_or(defaults.requests_per_minute),
            upstream_timeout: env::var("COPYFORGE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
            base_url: env::var("COPYFORGE_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("COPYFORGE_MODEL").unwrap_or(defaults.model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ClientConfig::default();
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.cache_ttl, Duration::from_secs(3600));
        assert_eq!(cfg.requests_per_minute, 10.0);
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(30));
    }
}
