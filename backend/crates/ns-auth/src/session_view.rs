use crate::SessionToken;

use ns_core::Role;

use serde::{Deserialize, Serialize};

/// Externally visible session, as handed to the UI layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

impl SessionView {
    pub fn from_token(token: &SessionToken) -> Self {
        Self {
            email: token.email.clone(),
            name: token.name.clone(),
            role: token.role,
        }
    }
}

impl From<&SessionToken> for SessionView {
    fn from(token: &SessionToken) -> Self {
        Self::from_token(token)
    }
}
