use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_MAX_AGE_SECS, MAX_SESSION_MAX_AGE_SECS,
    MAX_TENANT_ID_LENGTH, MIN_SESSION_MAX_AGE_SECS, MIN_SESSION_SECRET_LENGTH, Section,
};

use serde::Deserialize;

/// Tenant gate and session signing settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// The single directory tenant allowed to sign in. Unset rejects every sign-in.
    pub tenant_id: Option<String>,
    /// HS256 key for signing session tokens
    pub session_secret: Option<String>,
    pub session_max_age_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            tenant_id: None,
            session_secret: None,
            session_max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(tenant_id) = &self.tenant_id
            && tenant_id.len() > MAX_TENANT_ID_LENGTH
        {
            return Err(ConfigError::invalid(
                Section::Auth,
                format!(
                    "auth.tenant_id exceeds maximum length of {}",
                    MAX_TENANT_ID_LENGTH
                ),
            ));
        }

        if let Some(tenant_id) = self.tenant_id()
            && tenant_id != tenant_id.trim()
        {
            return Err(ConfigError::invalid(
                Section::Auth,
                "auth.tenant_id must not have surrounding whitespace",
            ));
        }

        if let Some(secret) = &self.session_secret
            && secret.len() < MIN_SESSION_SECRET_LENGTH
        {
            return Err(ConfigError::invalid(
                Section::Auth,
                format!(
                    "auth.session_secret must be at least {} characters",
                    MIN_SESSION_SECRET_LENGTH
                ),
            ));
        }

        if !(MIN_SESSION_MAX_AGE_SECS..=MAX_SESSION_MAX_AGE_SECS)
            .contains(&self.session_max_age_secs)
        {
            return Err(ConfigError::invalid(
                Section::Auth,
                format!(
                    "auth.session_max_age_secs must be {}-{}, got {}",
                    MIN_SESSION_MAX_AGE_SECS, MAX_SESSION_MAX_AGE_SECS, self.session_max_age_secs
                ),
            ));
        }

        Ok(())
    }

    /// Configured tenant as written; blank values count as unset
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}
