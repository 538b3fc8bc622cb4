use crate::{AuthError, Result as AuthErrorResult, SessionToken};

use ns_config::AuthConfig;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const CLOCK_SKEW_SECS: u64 = 30;

/// Wire shape of an encoded session: the token fields plus JWT timestamps
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    token: SessionToken,
    /// Issued at timestamp (Unix)
    iat: i64,
    /// Expiration timestamp (Unix)
    exp: i64,
}

/// Signs session tokens into opaque HS256 JWTs and reads them back
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    max_age_secs: i64,
}

impl SessionCodec {
    pub fn with_hs256(secret: &[u8], max_age_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_SECS;
        // Sessions carry no audience
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            max_age_secs: i64::try_from(max_age_secs).unwrap_or(i64::MAX),
        }
    }

    /// Codec keyed by `auth.session_secret`, expiring after `auth.session_max_age_secs`.
    #[track_caller]
    pub fn from_config(auth: &AuthConfig) -> AuthErrorResult<Self> {
        let secret = auth
            .session_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::MissingSessionSecret {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self::with_hs256(secret.as_bytes(), auth.session_max_age_secs))
    }

    /// Encode a token, stamping a fresh issue time and expiry
    #[track_caller]
    pub fn encode(&self, token: &SessionToken) -> AuthErrorResult<String> {
        let iat = Utc::now().timestamp();
        let claims = SessionClaims {
            token: token.clone(),
            iat,
            exp: iat.saturating_add(self.max_age_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry, returning the carried token
    #[track_caller]
    pub fn decode(&self, encoded: &str) -> AuthErrorResult<SessionToken> {
        let caller = Location::caller();
        decode::<SessionClaims>(encoded, &self.decoding_key, &self.validation)
            .map(|data| data.claims.token)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(caller),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(caller),
                },
            })
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }
}
