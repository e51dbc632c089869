use crate::{AuthError, LoginRateLimiter, RateLimitConfig};

#[test]
fn given_quota_when_burst_exhausted_then_rejects() {
    let limiter = LoginRateLimiter::new(RateLimitConfig {
        max_requests: 2,
        window_secs: 1,
    });

    assert!(limiter.check().is_ok());
    assert!(limiter.check().is_ok());

    let result = limiter.check();
    assert!(matches!(
        result,
        Err(AuthError::RateLimitExceeded { limit: 2, .. })
    ));
}

#[test]
fn given_default_config_when_checked_then_allows_first_attempt() {
    let limiter = LoginRateLimiter::default();

    assert!(limiter.check().is_ok());
}
