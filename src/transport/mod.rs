//! Upstream completion transport.

pub mod http;

pub use http::{CompletionRequest, CompletionTransport, HttpTransport, TransportError};
