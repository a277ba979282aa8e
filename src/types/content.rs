//! Generated content value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured copy returned to the caller.
///
/// Targets (not enforced): title ≤ 60 chars, body 300–500 words of
/// markdown, excerpt ≤ 150 chars, five keywords. Immutable; equality is
/// field-wise and includes `generated_at`, so a cache hit is byte-identical
/// to the entry it was stored from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub title: String,
    /// Markdown-formatted body.
    pub content: String,
    pub excerpt: String,
    pub keywords: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedContent {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        excerpt: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            excerpt: excerpt.into(),
            keywords,
            generated_at: Utc::now(),
        }
    }
}
