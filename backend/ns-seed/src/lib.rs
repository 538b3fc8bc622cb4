pub mod cli;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{Result, SeedError};

use ns_config::Config;
use ns_db::{SeedOptions, SeedReport, Seeder};

use std::path::Path;

use log::{error, info};

/// Resolve seed inputs: command-line flags, then configuration.
pub fn seed_options(cli: &Cli, config: &Config) -> SeedOptions {
    let tenant_id = cli
        .tenant_id
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(config.seed_tenant_id());
    let admin_email = cli
        .admin_email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(config.seed.admin_email.trim());

    SeedOptions {
        tenant_id: tenant_id.to_string(),
        admin_email: admin_email.to_string(),
    }
}

/// Open (and migrate) the database at `database_path`, then seed it.
///
/// Failures are logged before being returned; the pool is closed either way.
pub async fn run(database_path: &Path, options: SeedOptions) -> Result<SeedReport> {
    info!("Connecting to database: {}", database_path.display());
    let pool = ns_db::create_pool(database_path)
        .await
        .inspect_err(|e| error!("Seed failed opening {}: {}", database_path.display(), e))?;

    let outcome = Seeder::new(pool.clone(), options).run().await;
    pool.close().await;
    let report = outcome.inspect_err(|e| error!("Seed failed: {}", e))?;

    if report.is_noop() {
        info!("Nothing to seed, database already provisioned");
    } else {
        info!(
            "Seed complete: tenant_created={}, admin_created={}, desks_created={}",
            report.tenant_created, report.admin_created, report.desks_created
        );
    }

    Ok(report)
}
