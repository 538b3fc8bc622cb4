//! ns-seed - provision a NileSeat database
//!
//! Creates the configured tenant, the first admin and the demo desk layout.
//! Safe to re-run: rows that already exist are left untouched.
//!
//! # Examples
//!
//! ```bash
//! # Seed using .nileseat/config.toml and the environment
//! ns-seed
//!
//! # Override the tenant and admin for this run
//! ns-seed --tenant-id 8c1d... --admin-email ops@contoso.com
//! ```

use ns_config::Config;
use ns_seed::{Cli, Result as SeedErrorResult, logger};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match startup() {
        Ok(config) => config,
        Err(e) => {
            // Logger is not up yet
            eprintln!("ns-seed failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = ns_seed::seed_options(&cli, &config);
    let database_path = match config.database_path() {
        Ok(path) => path,
        Err(e) => {
            error!("Seed failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.dry_run {
        info!(
            "Dry run: would seed tenant={} admin={} into {}",
            options.tenant_id,
            options.admin_email,
            database_path.display()
        );
        return ExitCode::SUCCESS;
    }

    // run() logs its own failures
    match ns_seed::run(&database_path, options).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Load and validate configuration, then bring up logging.
fn startup() -> SeedErrorResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ns-seed v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    Ok(config)
}
