pub mod admin_store;
pub mod claims_resolver;
pub mod error;
pub mod in_memory_admin_store;
pub mod profile_claims;
pub mod reject_reason;
pub mod session_codec;
pub mod session_token;
pub mod session_view;

pub use admin_store::AdminStore;
pub use claims_resolver::ClaimsResolver;
pub use error::{AuthError, Result};
pub use in_memory_admin_store::InMemoryAdminStore;
pub use profile_claims::ProfileClaims;
pub use reject_reason::RejectReason;
pub use session_codec::SessionCodec;
pub use session_token::SessionToken;
pub use session_view::SessionView;

#[cfg(test)]
mod tests;
