//! Content request value objects.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Kind of copy being requested.
///
/// Unknown values deserialize to [`ContentType::BlogPost`], which keeps the
/// request pipeline total: an unrecognized type gets the blog-post persona
/// and templates rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    ServiceDescription,
    AboutSection,
    CaseStudy,
    #[serde(other)]
    BlogPost,
}

impl ContentType {
    /// Stable identifier used in fingerprints and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog-post",
            ContentType::ServiceDescription => "service-description",
            ContentType::AboutSection => "about-section",
            ContentType::CaseStudy => "case-study",
        }
    }

    /// Lenient parse: anything unrecognized lands on the blog-post type.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "service-description" => ContentType::ServiceDescription,
            "about-section" => ContentType::AboutSection,
            "case-study" => ContentType::CaseStudy,
            _ => ContentType::BlogPost,
        }
    }

    /// Default completion budget per content type.
    pub fn default_max_tokens(&self) -> u32 {
        match self {
            ContentType::BlogPost => 1200,
            ContentType::CaseStudy => 1000,
            ContentType::ServiceDescription => 800,
            ContentType::AboutSection => 600,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voice of the generated copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Conversational,
    Academic,
    #[default]
    #[serde(other)]
    Professional,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Conversational => "conversational",
            Tone::Academic => "academic",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output language. German is the default for absent or unrecognized values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    #[serde(other)]
    De,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable input to [`crate::ContentClient::generate`].
///
/// Construction is the one place caller input can fail: an empty topic is
/// rejected immediately so the generation path itself stays infallible.
/// Deserialization funnels through the same checks, so a request cannot
/// enter the system around them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContentRequest")]
pub struct ContentRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub tone: Tone,
    pub language: Language,
    max_tokens: Option<u32>,
}

/// Wire shape of a request before validation.
#[derive(Deserialize)]
struct RawContentRequest {
    topic: String,
    content_type: ContentType,
    #[serde(default)]
    tone: Tone,
    #[serde(default)]
    language: Language,
    #[serde(default)]
    max_tokens: Option<u32>,
}

impl TryFrom<RawContentRequest> for ContentRequest {
    type Error = Error;

    fn try_from(raw: RawContentRequest) -> Result<Self> {
        let mut request = ContentRequest::new(raw.topic, raw.content_type)?
            .with_tone(raw.tone)
            .with_language(raw.language);
        if let Some(budget) = raw.max_tokens {
            request = request.with_max_tokens(budget);
        }
        Ok(request)
    }
}

impl ContentRequest {
    pub fn new(topic: impl Into<String>, content_type: ContentType) -> Result<Self> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(Error::validation("topic must not be empty"));
        }
        Ok(Self {
            topic,
            content_type,
            tone: Tone::default(),
            language: Language::default(),
            max_tokens: None,
        })
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens.max(1));
        self
    }

    /// Completion budget: explicit override or the per-type default.
    ///
    /// Not part of the cache fingerprint; two requests differing only in
    /// budget share one cache entry.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
            .unwrap_or_else(|| self.content_type.default_max_tokens())
    }
}
