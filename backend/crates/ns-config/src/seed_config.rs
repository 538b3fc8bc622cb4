use crate::{ConfigError, ConfigErrorResult, DEFAULT_SEED_ADMIN_EMAIL, Section};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Falls back to `auth.tenant_id` when unset
    pub tenant_id: Option<String>,
    pub admin_email: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            tenant_id: None,
            admin_email: String::from(DEFAULT_SEED_ADMIN_EMAIL),
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let email = self.admin_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ConfigError::invalid(
                Section::Seed,
                format!("seed.admin_email '{}' is not an email address", self.admin_email),
            ));
        }

        Ok(())
    }
}
