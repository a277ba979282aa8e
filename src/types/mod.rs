//! Core type definitions.

pub mod content;
pub mod request;

pub use content::GeneratedContent;
pub use request::{ContentRequest, ContentType, Language, Tone};
