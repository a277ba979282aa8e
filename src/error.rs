use thiserror::Error;

/// Unified error type for the content-generation client.
///
/// Only [`Error::Validation`] ever reaches a caller of the public API (at
/// request construction). The remaining variants travel the internal
/// upstream path and are absorbed by `generate()`, which degrades to
/// fallback copy instead of propagating them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Malformed completion: {message}")]
    Malformed { message: String },
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed {
            message: msg.into(),
        }
    }

    /// Whether this error belongs to the absorb-and-degrade class.
    ///
    /// Everything except caller-input validation is handled internally by
    /// falling back to templated copy.
    pub fn is_degradable(&self) -> bool {
        !matches!(self, Error::Validation { .. })
    }
}
