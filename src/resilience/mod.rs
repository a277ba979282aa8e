//! Rate limiting for upstream calls.

pub mod rate_limiter;

pub use rate_limiter::{RateLimiter, RateLimiterConfig, RateLimiterSnapshot};
