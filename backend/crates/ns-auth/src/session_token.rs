use ns_core::{Principal, Role};

use serde::{Deserialize, Serialize};

/// Per-session carrier of resolved identity fields.
///
/// Only the claims resolver mutates a token; every field may be absent on a
/// partially populated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Lowercase identity key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tenant the session was issued for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl SessionToken {
    /// The principal described by this token, once every field is resolved.
    pub fn principal(&self) -> Option<Principal> {
        let email = self.email.as_deref()?;
        let tid = self.tid.as_deref()?;
        let role = self.role?;
        let name = self.name.as_deref().unwrap_or(email);

        Principal::new(email, name, tid, role).ok()
    }
}
