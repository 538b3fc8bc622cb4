pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::admin_record::AdminRecord;
pub use models::desk::Desk;
pub use models::desk_status::DeskStatus;
pub use models::principal::Principal;
pub use models::role::Role;
pub use models::tenant::Tenant;

#[cfg(test)]
mod tests;
