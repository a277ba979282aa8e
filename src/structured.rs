//! Typed parsing of model replies.
//!
//! The upstream model is instructed to reply with a bare JSON object, but in
//! practice replies arrive wrapped in prose or fenced code blocks. Parsing
//! is a fallible operation returning `Result`, so the caller's
//! fallback-on-any-failure policy is a plain branch.

use crate::types::GeneratedContent;
use crate::{Error, Result};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// The four-field contract the model is asked to honor.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub keywords: Vec<String>,
}

impl CompletionDraft {
    /// Stamp the draft into caller-facing content.
    pub fn into_content(self) -> GeneratedContent {
        GeneratedContent {
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            keywords: self.keywords,
            generated_at: Utc::now(),
        }
    }
}

static EXTRACTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"```json\s*([\s\S]*?)\s*```",
        r"```\s*([\s\S]*?)\s*```",
        r"\{[\s\S]*\}",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Locate a JSON value in free-form reply text.
///
/// Tries direct parsing first, then fenced code blocks, then the outermost
/// embedded object.
pub fn extract_json(text: &str) -> Option<serde_json::Value> {
    let text = text.trim();
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(text) {
        return Some(parsed);
    }

    for re in EXTRACTION_PATTERNS.iter() {
        if let Some(captures) = re.captures(text) {
            let candidate = match captures.get(1) {
                Some(inner) => inner.as_str(),
                None => captures.get(0).map(|c| c.as_str()).unwrap_or(text),
            };
            if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(candidate.trim()) {
                return Some(parsed);
            }
        }
    }

    None
}

/// Parse a raw completion into the typed draft.
///
/// Any shape failure here counts as an upstream fault for the client, never
/// as an error for the end caller.
pub fn parse_completion(raw: &str) -> Result<CompletionDraft> {
    let value =
        extract_json(raw).ok_or_else(|| Error::malformed("no JSON object in completion text"))?;
    let draft: CompletionDraft = serde_json::from_value(value)
        .map_err(|e| Error::malformed(format!("completion does not match contract: {e}")))?;
    if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
        return Err(Error::malformed("empty title or content in completion"));
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{"title": "T", "content": "Body", "excerpt": "E", "keywords": ["a", "b"]}"#;

    #[test]
    fn test_parse_bare_json() {
        let draft = parse_completion(WELL_FORMED).unwrap();
        assert_eq!(draft.title, "T");
        assert_eq!(draft.keywords, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = format!("Here is the result:\n```json\n{WELL_FORMED}\n```\nDone.");
        let draft = parse_completion(&raw).unwrap();
        assert_eq!(draft.excerpt, "E");
    }

    #[test]
    fn test_parse_embedded_object() {
        let raw = format!("Sure! {WELL_FORMED} Let me know if you need changes.");
        assert!(parse_completion(&raw).is_ok());
    }

    #[test]
    fn test_non_json_is_rejected() {
        assert!(parse_completion("I cannot help with that.").is_err());
    }

    #[test]
    fn test_missing_keys_are_rejected() {
        assert!(parse_completion(r#"{"title": "T"}"#).is_err());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let raw = r#"{"title": " ", "content": "Body", "excerpt": "E", "keywords": []}"#;
        assert!(parse_completion(raw).is_err());
    }

    #[test]
    fn test_into_content_stamps_timestamp() {
        let before = Utc::now();
        let content = parse_completion(WELL_FORMED).unwrap().into_content();
        assert!(content.generated_at >= before);
    }
}
