use crate::RejectReason;

use std::error::Error as StdError;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("auth.session_secret is not configured {location}")]
    MissingSessionSecret { location: ErrorLocation },

    #[error("Session expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Sign-in rejected: {reason} {location}")]
    SignInRejected {
        reason: RejectReason,
        location: ErrorLocation,
    },

    #[error("Session tenant mismatch: expected '{expected}', got '{actual}' {location}")]
    TenantMismatch {
        expected: String,
        actual: String,
        location: ErrorLocation,
    },

    #[error("Admin lookup failed for '{email}': {source} {location}")]
    AdminLookup {
        email: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Wrap a failure of the admin store backend
    #[track_caller]
    pub fn admin_lookup<E>(email: &str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::AdminLookup {
            email: email.to_string(),
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code for callers that surface auth failures
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSessionSecret { .. } => "SESSION_SECRET_MISSING",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::SignInRejected { .. } => "SIGN_IN_REJECTED",
            Self::TenantMismatch { .. } => "TENANT_MISMATCH",
            Self::AdminLookup { .. } => "ADMIN_LOOKUP_FAILED",
        }
    }

    /// Offending claim name, for claim validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
