use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LogLevel, LoggingConfig,
    RateLimitConfig, ServerConfig, ValidationConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for HM_CONFIG_DIR env var, else use ./.hm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HM_CONFIG_DIR env var > ./.hm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("HM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".hm"))
    }

    /// Apply HM_* environment variable overrides on top of the file values
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HM_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parse("HM_SERVER_PORT") {
            self.server.port = port;
        }
        if let Ok(path) = std::env::var("HM_DATABASE_PATH") {
            self.database.path = path;
        }
        if let Ok(secret) = std::env::var("HM_JWT_SECRET") {
            self.auth.jwt_secret = Some(secret);
        }
        if let Some(ttl) = env_parse("HM_TOKEN_TTL_HOURS") {
            self.auth.token_ttl_hours = ttl;
        }
        if let Ok(level) = std::env::var("HM_LOG_LEVEL") {
            // FromStr never fails; invalid values fall back to Info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.validation.validate()?;
        self.rate_limit.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256, token ttl {}h (secret {})",
            self.auth.token_ttl_hours,
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "MISSING"
            }
        );
        info!(
            "  rate_limit: {} requests / {}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
