//! Content client orchestration.

pub mod builder;
pub mod core;

pub use builder::ContentClientBuilder;
pub use core::ContentClient;
