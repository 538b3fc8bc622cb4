use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, LogLevel,
    Section,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub dir: String,
    /// Log file name inside `dir`; stdout when unset
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.contains("..") || Path::new(&self.dir).is_absolute() {
            return Err(ConfigError::invalid(
                Section::Logging,
                format!("logging.dir '{}' must be relative without '..'", self.dir),
            ));
        }
        if let Some(file) = &self.file
            && (file.is_empty() || file.contains(['/', '\\']))
        {
            return Err(ConfigError::invalid(
                Section::Logging,
                format!("logging.file '{}' must be a plain file name", file),
            ));
        }

        Ok(())
    }
}
