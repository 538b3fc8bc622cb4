use crate::profile_claims::{non_blank, present};
use crate::{
    AdminStore, AuthError, ProfileClaims, RejectReason, Result as AuthErrorResult, SessionCodec,
    SessionToken, SessionView,
};

use ns_config::AuthConfig;
use ns_core::Role;

use std::future::Future;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, error, warn};

/// Tenant gate and session resolver for federated sign-in.
///
/// Holds the single configured tenant id and the admin store used to derive
/// roles. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct ClaimsResolver {
    tenant_id: Option<String>,
    admins: Arc<dyn AdminStore>,
}

impl ClaimsResolver {
    /// A blank `tenant_id` counts as unconfigured. Any other value is kept
    /// verbatim and matched exactly.
    pub fn new(tenant_id: Option<String>, admins: Arc<dyn AdminStore>) -> Self {
        Self {
            tenant_id: tenant_id.filter(|t| present(Some(t)).is_some()),
            admins,
        }
    }

    /// Resolver gated on `auth.tenant_id`, untrimmed.
    pub fn from_config(auth: &AuthConfig, admins: Arc<dyn AdminStore>) -> Self {
        Self::new(auth.tenant_id.clone(), admins)
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// Detailed form of [`admit`](Self::admit).
    pub fn check_admission(&self, claims: &ProfileClaims) -> Result<(), RejectReason> {
        let Some(configured) = self.tenant_id.as_deref() else {
            return Err(RejectReason::MissingTenantConfig);
        };
        if claims.identifier().is_none() {
            return Err(RejectReason::MissingIdentifier);
        }
        if claims.tenant_id() != Some(configured) {
            return Err(RejectReason::TenantMismatch);
        }
        Ok(())
    }

    /// Whether a sign-in with these claims may proceed. Fails closed.
    pub fn admit(&self, claims: &ProfileClaims) -> bool {
        match self.check_admission(claims) {
            Ok(()) => true,
            Err(reason) => {
                warn!("Sign-in rejected: {}", reason);
                false
            }
        }
    }

    /// Merge claims into the token and re-derive the role.
    ///
    /// Claims override existing token values. `claims` is `None` on session
    /// refresh; the admin lookup still runs so role changes apply without
    /// re-authentication.
    pub async fn resolve_token(
        &self,
        mut token: SessionToken,
        claims: Option<&ProfileClaims>,
    ) -> AuthErrorResult<SessionToken> {
        let resolved_email = claims
            .and_then(ProfileClaims::identifier)
            .or_else(|| non_blank(token.email.as_deref()))
            .map(str::to_lowercase);
        if resolved_email.is_some() {
            token.email = resolved_email;
        }

        if let Some(name) = claims.and_then(ProfileClaims::display_name) {
            token.name = Some(name.to_string());
        }
        if let Some(tid) = claims.and_then(ProfileClaims::tenant_id) {
            token.tid = Some(tid.to_string());
        }

        if let Some(email) = non_blank(token.email.as_deref()) {
            let admin = self.admins.find_by_email(email).await.inspect_err(|e| {
                error!("Admin lookup failed during session resolution: {}", e);
            })?;
            let role = if admin.is_some() {
                Role::Admin
            } else {
                Role::User
            };
            debug!("Resolved session for {} with role {}", email, role);
            token.role = Some(role);
        }

        Ok(token)
    }

    pub fn project_session(&self, token: &SessionToken) -> SessionView {
        SessionView::from_token(token)
    }

    /// One authentication event: admit, then resolve.
    #[track_caller]
    pub fn sign_in<'a>(
        &'a self,
        claims: &'a ProfileClaims,
        token: SessionToken,
    ) -> impl Future<Output = AuthErrorResult<SessionToken>> + Send + 'a {
        let caller = Location::caller();
        async move {
            if let Err(reason) = self.check_admission(claims) {
                warn!("Sign-in rejected: {}", reason);
                return Err(AuthError::SignInRejected {
                    reason,
                    location: ErrorLocation::from(caller),
                });
            }
            self.resolve_token(token, Some(claims)).await
        }
    }

    /// Decode a stored session, enforce the tenant invariant and re-resolve it.
    #[track_caller]
    pub fn refresh<'a>(
        &'a self,
        codec: &'a SessionCodec,
        encoded: &'a str,
    ) -> impl Future<Output = AuthErrorResult<SessionToken>> + Send + 'a {
        let caller = Location::caller();
        async move {
            let token = codec.decode(encoded)?;
            self.ensure_session_tenant(&token, caller)?;
            self.resolve_token(token, None).await
        }
    }

    fn ensure_session_tenant(
        &self,
        token: &SessionToken,
        caller: &'static Location<'static>,
    ) -> AuthErrorResult<()> {
        let Some(configured) = self.tenant_id.as_deref() else {
            return Err(AuthError::SignInRejected {
                reason: RejectReason::MissingTenantConfig,
                location: ErrorLocation::from(caller),
            });
        };

        match token.tid.as_deref() {
            Some(tid) if tid == configured => Ok(()),
            other => Err(AuthError::TenantMismatch {
                expected: configured.to_string(),
                actual: other.unwrap_or_default().to_string(),
                location: ErrorLocation::from(caller),
            }),
        }
    }
}
