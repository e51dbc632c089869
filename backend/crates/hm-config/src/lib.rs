mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "hotel.db";
const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 30;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

const MIN_PORT: u16 = 1024;
const MIN_SECRET_BYTES: usize = 32;
const MAX_TOKEN_TTL_HOURS: u64 = 24 * 30;

#[cfg(test)]
mod tests;
