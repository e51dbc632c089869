pub mod claims;
pub mod cpf;
pub mod error;
pub mod password;
pub mod rate_limit;
pub mod token_service;
pub mod workflow;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use rate_limit::{LoginRateLimiter, RateLimitConfig};
pub use token_service::{DEFAULT_TOKEN_TTL_SECS, TokenService};
pub use workflow::{CredentialWorkflow, Registration, Session};

#[cfg(test)]
mod tests;
