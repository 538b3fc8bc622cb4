use crate::Result as AuthErrorResult;

use ns_core::AdminRecord;

use async_trait::async_trait;

/// Lookup of known administrators, keyed by lowercase email.
///
/// Implementations must return `Ok(None)` only for a definite "not found";
/// backend failures are errors.
#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AuthErrorResult<Option<AdminRecord>>;
}
