use crate::cache::{CacheStats, ContentCache, Fingerprinter};
use crate::fallback;
use crate::prompt;
use crate::resilience::RateLimiter;
use crate::structured;
use crate::transport::{CompletionRequest, CompletionTransport};
use crate::types::{ContentRequest, GeneratedContent};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Content-generation client.
///
/// Owns its cache and rate-limiter state; construct one instance per
/// composition root (tests get isolation by constructing their own).
/// Safe to share across tasks behind an `Arc`.
pub struct ContentClient {
    pub(crate) cache: ContentCache,
    pub(crate) fingerprinter: Fingerprinter,
    pub(crate) limiter: RateLimiter,
    /// `None` means no credential was configured: permanent fallback mode.
    pub(crate) transport: Option<Arc<dyn CompletionTransport>>,
}

impl ContentClient {
    /// Produce content for `request`, transparently using the cache, the
    /// rate limiter and the templated fallback.
    ///
    /// Infallible by contract: every expected failure mode (missing
    /// credential, upstream fault, malformed reply) degrades to fallback
    /// copy. Caller-input validation already happened at
    /// [`ContentRequest::new`].
    pub async fn generate(&self, request: &ContentRequest) -> GeneratedContent {
        let key = self.fingerprinter.generate(request);

        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "cache hit");
            return hit;
        }

        let content = match self.try_upstream(request).await {
            Ok(content) => content,
            Err(err) => {
                debug_assert!(err.is_degradable());
                warn!(error = %err, topic = %request.topic, "upstream path failed, serving fallback copy");
                fallback::render(request)
            }
        };

        self.cache.insert(&key, content.clone());
        content
    }

    /// Discard all cache entries immediately. Idempotent.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Current entry count and the fingerprints present, for diagnostics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The single upstream attempt: limiter, prompts, call, parse.
    ///
    /// No retries at this layer; any error is absorbed by `generate`.
    async fn try_upstream(&self, request: &ContentRequest) -> Result<GeneratedContent> {
        let transport = self.transport.as_ref().ok_or_else(|| {
            debug!("no API key configured, skipping upstream");
            Error::configuration("no API key configured")
        })?;

        self.limiter.acquire().await;

        let completion = CompletionRequest {
            system: prompt::system_prompt(request.content_type, request.language).to_string(),
            user: prompt::user_prompt(request),
            max_tokens: request.max_tokens(),
        };

        let raw = transport.complete(&completion).await?;
        let draft = structured::parse_completion(&raw)?;
        Ok(draft.into_content())
    }
}
