use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RateLimiterSnapshot {
    pub rpm: f64,
    pub burst: f64,
    pub tokens: f64,
    /// Estimated wait time until a token is available (ms), if currently empty.
    pub estimated_wait_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct RateLimiterConfig {
    /// Budget in requests per minute.
    pub rpm: f64,
    /// Maximum burst size (tokens).
    pub burst: f64,
}

impl RateLimiterConfig {
    /// Per-minute budget; the bucket holds at most one minute's worth.
    pub fn from_rpm(rpm: f64) -> Option<Self> {
        if !rpm.is_finite() || rpm < 0.0 {
            return None;
        }
        Some(Self {
            rpm,
            burst: rpm.max(1.0),
        })
    }

    fn tokens_per_second(&self) -> f64 {
        self.rpm / 60.0
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            rpm: 10.0,
            burst: 10.0,
        }
    }
}

#[derive(Debug)]
struct State {
    tokens: f64,
    last: Instant,
}

/// Cooperative token-bucket rate limiter.
///
/// Accrues capacity continuously at `rpm / 60` tokens per second and spends
/// exactly one token per permitted call. When the bucket is empty, `acquire`
/// sleeps for the bounded shortfall instead of rejecting. `rpm = 0` disables
/// limiting entirely.
pub struct RateLimiter {
    cfg: RateLimiterConfig,
    state: Mutex<State>,
}

impl RateLimiter {
    pub fn new(cfg: RateLimiterConfig) -> Self {
        let burst = cfg.burst;
        let state = Mutex::new(State {
            tokens: burst,
            last: Instant::now(),
        });
        Self { cfg, state }
    }

    fn refill_locked(cfg: &RateLimiterConfig, st: &mut State) {
        let now = Instant::now();
        let elapsed = now.duration_since(st.last).as_secs_f64();
        if elapsed > 0.0 {
            st.tokens = (st.tokens + elapsed * cfg.tokens_per_second()).min(cfg.burst);
            st.last = now;
        }
    }

    /// Acquire one token (may sleep).
    pub async fn acquire(&self) {
        let cfg = &self.cfg;

        loop {
            let wait_duration = {
                let mut st = self.state.lock().await;

                if cfg.rpm <= 0.0 {
                    return;
                }

                Self::refill_locked(cfg, &mut st);

                if st.tokens >= 1.0 {
                    st.tokens -= 1.0;
                    return;
                }

                // Bounded: proportional to how far under budget we are.
                let missing = 1.0 - st.tokens;
                Duration::from_secs_f64(missing / cfg.tokens_per_second())
            };

            if wait_duration.as_millis() > 0 {
                tokio::time::sleep(wait_duration).await;
            }
        }
    }

    /// Try to acquire a token without waiting, returns true if successful.
    pub async fn try_acquire(&self) -> bool {
        let cfg = &self.cfg;
        if cfg.rpm <= 0.0 {
            return true;
        }

        let mut st = self.state.lock().await;
        Self::refill_locked(cfg, &mut st);

        if st.tokens >= 1.0 {
            st.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    pub async fn snapshot(&self) -> RateLimiterSnapshot {
        let cfg = &self.cfg;
        let mut st = self.state.lock().await;

        let mut wait_ms = None;
        if cfg.rpm > 0.0 {
            Self::refill_locked(cfg, &mut st);
            if st.tokens < 1.0 {
                let missing = 1.0 - st.tokens;
                wait_ms = Some((missing / cfg.tokens_per_second() * 1000.0) as u64);
            }
        }

        RateLimiterSnapshot {
            rpm: cfg.rpm,
            burst: cfg.burst,
            tokens: st.tokens,
            estimated_wait_ms: wait_ms,
        }
    }
}
