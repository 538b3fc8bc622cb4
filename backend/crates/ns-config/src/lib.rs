mod auth_config;
mod config;
mod database_config;
mod env;
mod error;
mod log_level;
mod logging_config;
mod seed_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, Section};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_config::SeedConfig;

const CONFIG_DIR_ENV: &str = "NS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".nileseat";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "nileseat.db";

const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 30 * 24 * 60 * 60;
const MIN_SESSION_MAX_AGE_SECS: u64 = 60;
const MAX_SESSION_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;
const MIN_SESSION_SECRET_LENGTH: usize = 32;
const MAX_TENANT_ID_LENGTH: usize = 128;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SEED_TENANT_ID: &str = "replace-with-tenant-id";
const DEFAULT_SEED_ADMIN_EMAIL: &str = "you@example.com";

#[cfg(test)]
mod tests;
