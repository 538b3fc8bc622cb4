pub mod connection;
pub mod error;
pub mod repositories;
pub mod seed;

pub use connection::pool::{create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::admin_repository::AdminRepository;
pub use repositories::desk_repository::DeskRepository;
pub use repositories::tenant_repository::TenantRepository;
pub use seed::{SEED_DESKS, SeedOptions, SeedReport, Seeder};
