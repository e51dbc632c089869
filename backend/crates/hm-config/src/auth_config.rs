use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_HOURS, MAX_TOKEN_TTL_HOURS, MIN_SECRET_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; there is no unauthenticated mode.
    pub jwt_secret: Option<String>,
    /// Bearer token lifetime in hours
    pub token_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set it in config.toml or HM_JWT_SECRET)",
                ));
            }
            Some(ref secret) if secret.len() < MIN_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_SECRET_BYTES,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_hours == 0 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_hours must be 1-{}, got {}",
                MAX_TOKEN_TTL_HOURS, self.token_ttl_hours
            )));
        }

        Ok(())
    }

    pub fn token_ttl_secs(&self) -> i64 {
        (self.token_ttl_hours * 3600) as i64
    }
}
