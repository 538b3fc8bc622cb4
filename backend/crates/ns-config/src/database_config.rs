use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, Section};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                Section::Database,
                "database.path cannot be empty",
            ));
        }
        // Must stay inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::invalid(
                Section::Database,
                format!("database.path '{}' must be relative without '..'", self.path),
            ));
        }

        Ok(())
    }
}
