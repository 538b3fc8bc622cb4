use crate::env;
use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DEFAULT_SEED_TENANT_ID, DatabaseConfig, LoggingConfig, SeedConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

impl Config {
    /// Resolve configuration from, in increasing precedence: built-in
    /// defaults, `<config dir>/config.toml`, the identity-provider variables
    /// (`AZURE_AD_*`, `NILESEAT_ADMIN_EMAIL`) and `NS_*` variables.
    ///
    /// The config dir (`NS_CONFIG_DIR`, else `./.nileseat`) is created if
    /// missing. Nothing is validated here; call [`validate`](Self::validate).
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let mut config = match config_path.try_exists() {
            Ok(true) => Self::load_toml(&config_path)?,
            Ok(false) => Config::default(),
            Err(e) => return Err(ConfigError::io(&config_path, e)),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `NS_CONFIG_DIR`, else `.nileseat` under the working directory.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|e| ConfigError::io(".", e))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// First failing section wins.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.seed.validate()?;

        Ok(())
    }

    /// Database file, resolved against the config dir.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(filename) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(
            Self::config_dir()?
                .join(&self.logging.dir)
                .join(filename),
        ))
    }

    /// Tenant to provision: seed.tenant_id, then auth.tenant_id, then a placeholder.
    pub fn seed_tenant_id(&self) -> &str {
        self.seed
            .tenant_id
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or_else(|| self.auth.tenant_id())
            .unwrap_or(DEFAULT_SEED_TENANT_ID)
    }

    /// Secrets are reported as set/unset only.
    pub fn log_summary(&self) {
        info!("Configuration: database={}", self.database.path);
        info!(
            "Configuration: auth tenant={}, session_secret={}, session_max_age={}s",
            self.auth.tenant_id().unwrap_or("<unset, all sign-ins rejected>"),
            if self.auth.session_secret.is_some() { "set" } else { "unset" },
            self.auth.session_max_age_secs
        );
        info!(
            "Configuration: logging level={} colored={} file={}",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("<stdout>")
        );
        info!(
            "Configuration: seed tenant={} admin={}",
            self.seed_tenant_id(),
            self.seed.admin_email
        );
    }

    fn apply_env_overrides(&mut self) {
        // Identity provider variables shared with the web frontend
        env::optional("AZURE_AD_TENANT_ID", &mut self.auth.tenant_id);
        env::string("NILESEAT_ADMIN_EMAIL", &mut self.seed.admin_email);

        env::string("NS_DATABASE_PATH", &mut self.database.path);

        env::optional("NS_AUTH_TENANT_ID", &mut self.auth.tenant_id);
        env::optional("NS_AUTH_SESSION_SECRET", &mut self.auth.session_secret);
        env::parsed("NS_AUTH_SESSION_MAX_AGE_SECS", &mut self.auth.session_max_age_secs);

        env::parsed("NS_LOG_LEVEL", &mut self.logging.level);
        env::flag("NS_LOG_COLORED", &mut self.logging.colored);
        env::optional("NS_LOG_FILE", &mut self.logging.file);

        env::optional("NS_SEED_TENANT_ID", &mut self.seed.tenant_id);
        env::string("NS_SEED_ADMIN_EMAIL", &mut self.seed.admin_email);
    }
}
