use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CLAIM_TENANT_ID: &str = "tid";
const CLAIM_EMAIL: &str = "email";
const CLAIM_PREFERRED_USERNAME: &str = "preferred_username";
const CLAIM_NAME: &str = "name";

/// Identity provider profile claims, validated at the callback boundary.
///
/// Every claim is optional and untrusted. Blank values are treated as absent.
/// Values are stored as sent; `tid` is never trimmed so the tenant gate
/// compares exactly what the provider issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileClaims {
    /// Directory (tenant) the principal signed in from
    pub tid: Option<String>,
    pub email: Option<String>,
    /// Fallback identifier when the provider omits `email`
    pub preferred_username: Option<String>,
    pub name: Option<String>,
}

impl ProfileClaims {
    /// Parse the raw profile object delivered by the provider.
    ///
    /// Rejects non-object payloads and known claims carrying non-string values.
    /// Unknown claims are ignored.
    #[track_caller]
    pub fn from_json(profile: &Value) -> AuthErrorResult<Self> {
        let caller = Location::caller();

        let object = profile
            .as_object()
            .ok_or_else(|| AuthError::InvalidClaim {
                claim: "profile".to_string(),
                message: "profile claims must be a JSON object".to_string(),
                location: ErrorLocation::from(caller),
            })?;

        Ok(Self {
            tid: Self::read_claim(object, CLAIM_TENANT_ID, caller)?,
            email: Self::read_claim(object, CLAIM_EMAIL, caller)?,
            preferred_username: Self::read_claim(object, CLAIM_PREFERRED_USERNAME, caller)?,
            name: Self::read_claim(object, CLAIM_NAME, caller)?,
        })
    }

    /// Email-like identifier: `email` first, then `preferred_username`
    pub fn identifier(&self) -> Option<&str> {
        non_blank(self.email.as_deref()).or_else(|| non_blank(self.preferred_username.as_deref()))
    }

    /// Raw `tid`, only blank values dropped
    pub fn tenant_id(&self) -> Option<&str> {
        present(self.tid.as_deref())
    }

    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    fn read_claim(
        object: &Map<String, Value>,
        claim: &str,
        caller: &'static Location<'static>,
    ) -> AuthErrorResult<Option<String>> {
        match object.get(claim) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(present(Some(value)).map(str::to_string)),
            Some(other) => Err(AuthError::InvalidClaim {
                claim: claim.to_string(),
                message: format!("expected a string, got {}", json_type_name(other)),
                location: ErrorLocation::from(caller),
            }),
        }
    }
}

/// Trimmed value, `None` when blank
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Untrimmed value, `None` when blank
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
