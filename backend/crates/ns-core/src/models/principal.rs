use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A fully resolved, signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identity key, lowercase
    pub email: String,
    pub display_name: String,
    pub tenant_id: String,
    pub role: Role,
}

impl Principal {
    /// Build a principal, canonicalizing the email.
    #[track_caller]
    pub fn new(
        email: &str,
        display_name: &str,
        tenant_id: &str,
        role: Role,
    ) -> CoreErrorResult<Self> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(CoreError::Validation {
                message: "principal email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if tenant_id.is_empty() {
            return Err(CoreError::Validation {
                message: "principal tenant_id cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            email,
            display_name: display_name.to_string(),
            tenant_id: tenant_id.to_string(),
            role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
