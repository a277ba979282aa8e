//! Cache key generation.

use crate::types::ContentRequest;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub hash: String,
}

impl CacheKey {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Derives the deterministic fingerprint a request is cached under.
///
/// Only the four semantic fields participate: topic, content type, tone and
/// language. The token budget is deliberately excluded: it is treated as a
/// performance knob, so requests differing only in `max_tokens` resolve to
/// the same entry.
pub struct Fingerprinter {
    salt: Option<String>,
}

impl Fingerprinter {
    pub fn new() -> Self {
        Self { salt: None }
    }

    /// Namespace keys, e.g. to separate instances sharing diagnostics.
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    pub fn generate(&self, request: &ContentRequest) -> CacheKey {
        // BTreeMap gives a canonical field order regardless of insertion.
        let mut parts: BTreeMap<&str, String> = BTreeMap::new();
        parts.insert("topic", request.topic.clone());
        parts.insert("content_type", request.content_type.as_str().to_string());
        parts.insert("tone", request.tone.as_str().to_string());
        parts.insert("language", request.language.as_str().to_string());
        if let Some(ref s) = self.salt {
            parts.insert("salt", s.clone());
        }
        let canonical = serde_json::to_string(&parts).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let hash: String = hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect();
        CacheKey::new(hash)
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentType, Language, Tone};

    fn request(topic: &str) -> ContentRequest {
        ContentRequest::new(topic, ContentType::BlogPost).unwrap()
    }

    #[test]
    fn test_identical_requests_hash_identically() {
        let fp = Fingerprinter::new();
        let a = fp.generate(&request("Vereinssoftware"));
        let b = fp.generate(&request("Vereinssoftware"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_semantic_fields_change_the_key() {
        let fp = Fingerprinter::new();
        let base = request("Vereinssoftware");
        assert_ne!(fp.generate(&base), fp.generate(&request("Mitgliederverwaltung")));
        assert_ne!(
            fp.generate(&base),
            fp.generate(&base.clone().with_tone(Tone::Academic))
        );
        assert_ne!(
            fp.generate(&base),
            fp.generate(&base.clone().with_language(Language::En))
        );
    }

    #[test]
    fn test_max_tokens_does_not_change_the_key() {
        let fp = Fingerprinter::new();
        let base = request("Vereinssoftware");
        let budgeted = base.clone().with_max_tokens(42);
        assert_eq!(fp.generate(&base), fp.generate(&budgeted));
    }

    #[test]
    fn test_salt_namespaces_keys() {
        let plain = Fingerprinter::new();
        let salted = Fingerprinter::new().with_salt("tenant-a");
        let req = request("Vereinssoftware");
        assert_ne!(plain.generate(&req), salted.generate(&req));
    }
}
