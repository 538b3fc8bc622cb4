mod properties;

use crate::{AdminStore, AuthError, ClaimsResolver, InMemoryAdminStore, ProfileClaims, Result};

use ns_core::AdminRecord;

use std::sync::Arc;

use async_trait::async_trait;

pub(crate) const TENANT: &str = "11111111-2222-3333-4444-555555555555";

/// Admin store whose backend is always unreachable
pub(crate) struct UnavailableAdminStore;

#[async_trait]
impl AdminStore for UnavailableAdminStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>> {
        Err(AuthError::admin_lookup(
            email,
            std::io::Error::other("connection refused"),
        ))
    }
}

pub(crate) fn resolver_with(store: &InMemoryAdminStore) -> ClaimsResolver {
    ClaimsResolver::new(Some(TENANT.to_string()), Arc::new(store.clone()))
}

pub(crate) fn claims(tid: Option<&str>, email: Option<&str>) -> ProfileClaims {
    ProfileClaims {
        tid: tid.map(str::to_string),
        email: email.map(str::to_string),
        preferred_username: None,
        name: None,
    }
}
