//! Shared application state for the REST handlers.

use std::sync::Arc;

use hm_auth::{CredentialWorkflow, LoginRateLimiter, RateLimitConfig, TokenService};
use hm_config::ValidationConfig;
use hm_db::GuestRepository;
use sqlx::SqlitePool;

/// State handed to every handler. Cheap to clone; the workflow and rate
/// limiter are shared, the pool is its own handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub workflow: Arc<CredentialWorkflow<GuestRepository>>,
    pub rate_limiter: Arc<LoginRateLimiter>,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        tokens: TokenService,
        validation: ValidationConfig,
        rate_limit: RateLimitConfig,
    ) -> Self {
        let workflow = CredentialWorkflow::new(GuestRepository::new(pool.clone()), tokens);

        Self {
            pool,
            workflow: Arc::new(workflow),
            rate_limiter: Arc::new(LoginRateLimiter::new(rate_limit)),
            validation,
        }
    }

    pub fn repository(&self) -> GuestRepository {
        GuestRepository::new(self.pool.clone())
    }

    pub fn tokens(&self) -> &TokenService {
        self.workflow.tokens()
    }
}
