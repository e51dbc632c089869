//! Rate limiting for the credential endpoints.

use crate::{AuthError, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

/// Configuration for rate limiting
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum attempts per window
    pub max_requests: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 30, // 30 attempts
            window_secs: 60,  // per minute
        }
    }
}

/// Guards register/login/refresh against brute-force bursts. One limiter is
/// shared across the credential endpoints.
pub struct LoginRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let quota = Quota::per_second(
            NonZeroU32::new(config.max_requests / config.window_secs.max(1) as u32)
                .unwrap_or(NonZeroU32::new(1).unwrap()),
        );

        Self {
            limiter: RateLimiter::direct(quota),
            config,
        }
    }

    /// Check if an attempt is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self) -> AuthErrorResult<()> {
        self.limiter
            .check()
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
