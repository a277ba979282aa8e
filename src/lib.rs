//! # copyforge
//!
//! Resilient AI content-generation client: wraps a single LLM completion
//! call with caching, rate limiting, prompt templating and a deterministic
//! fallback so callers always receive usable copy.
//!
//! ## Overview
//!
//! [`ContentClient::generate`] takes a structured [`ContentRequest`]
//! (topic, content type, tone, language, token budget) and returns a
//! [`GeneratedContent`] (title, markdown body, excerpt, keywords). Results
//! are cached under a fingerprint of the semantically relevant request
//! fields; upstream calls are paced by a cooperative token bucket; every
//! upstream fault (missing credential, network error, malformed reply)
//! degrades to templated fallback copy instead of surfacing an error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use copyforge::{ContentClientBuilder, ContentRequest, ContentType, Language, Tone};
//!
//! #[tokio::main]
//! async fn main() -> copyforge::Result<()> {
//!     let client = ContentClientBuilder::new()
//!         .api_key("your-api-key")
//!         .requests_per_minute(10.0)
//!         .build()?;
//!
//!     let request = ContentRequest::new("Vereinsdigitalisierung", ContentType::ServiceDescription)?
//!         .with_tone(Tone::Professional)
//!         .with_language(Language::De);
//!
//!     let copy = client.generate(&request).await;
//!     println!("{}", copy.title);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Content client orchestration and builder |
//! | [`types`] | Core value objects (requests, generated content) |
//! | [`cache`] | Request fingerprinting and the TTL result cache |
//! | [`resilience`] | Token-bucket rate limiting |
//! | [`prompt`] | System/user prompt templates per content type and language |
//! | [`structured`] | JSON extraction and typed parsing of model replies |
//! | [`fallback`] | Deterministic templated copy for degraded operation |
//! | [`transport`] | Upstream chat-completion HTTP transport |
//! | [`config`] | Explicit client configuration with env loading |

pub mod cache;
pub mod client;
pub mod config;
pub mod fallback;
pub mod prompt;
pub mod resilience;
pub mod structured;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ContentClient, ContentClientBuilder};
pub use config::ClientConfig;
pub use types::{
    content::GeneratedContent,
    request::{ContentRequest, ContentType, Language, Tone},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
