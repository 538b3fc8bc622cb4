//! Idempotent provisioning of the initial tenant, admin and desks.

use crate::{AdminRepository, DeskRepository, Result as DbErrorResult, TenantRepository};

use ns_core::{AdminRecord, Desk, DeskStatus, Tenant};

use log::info;
use sqlx::SqlitePool;

const TENANT_DISPLAY_NAME: &str = "Primary Tenant";
const ADMIN_DISPLAY_NAME: &str = "Seed Admin";
const ADMIN_ADDED_BY: &str = "seed";
const FALLBACK_DOMAIN: &str = "example.com";

/// Fixed desk layout: (code, status, map_x, map_y)
pub const SEED_DESKS: [(&str, DeskStatus, f64, f64); 3] = [
    ("D-101", DeskStatus::Available, 0.20, 0.35),
    ("D-102", DeskStatus::Available, 0.45, 0.60),
    ("D-103", DeskStatus::Unavailable, 0.70, 0.25),
];

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub tenant_id: String,
    pub admin_email: String,
}

impl SeedOptions {
    /// Email domain of the seed admin, used as the tenant domain
    pub fn domain(&self) -> &str {
        self.admin_email
            .split('@')
            .nth(1)
            .filter(|d| !d.is_empty())
            .unwrap_or(FALLBACK_DOMAIN)
    }
}

/// What a seed run actually created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tenant_created: bool,
    pub admin_created: bool,
    pub desks_created: u64,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        !self.tenant_created && !self.admin_created && self.desks_created == 0
    }
}

pub struct Seeder {
    tenants: TenantRepository,
    admins: AdminRepository,
    desks: DeskRepository,
    options: SeedOptions,
}

impl Seeder {
    pub fn new(pool: SqlitePool, options: SeedOptions) -> Self {
        Self {
            tenants: TenantRepository::new(pool.clone()),
            admins: AdminRepository::new(pool.clone()),
            desks: DeskRepository::new(pool),
            options,
        }
    }

    /// Safe to re-run: existing tenant/admin rows are kept and duplicate desk
    /// codes are skipped.
    pub async fn run(&self) -> DbErrorResult<SeedReport> {
        let tenant = Tenant::new(
            &self.options.tenant_id,
            self.options.domain(),
            TENANT_DISPLAY_NAME,
        );
        let tenant_created = self.tenants.upsert(&tenant).await?;
        info!(
            "Tenant {} {}",
            tenant.tenant_id,
            if tenant_created { "created" } else { "already present" }
        );

        let admin = AdminRecord::new(&self.options.admin_email, ADMIN_DISPLAY_NAME, ADMIN_ADDED_BY);
        let admin_created = self.admins.upsert(&admin).await?;
        info!(
            "Admin {} {}",
            admin.email,
            if admin_created { "created" } else { "already present" }
        );

        let desks: Vec<Desk> = SEED_DESKS
            .iter()
            .map(|(code, status, x, y)| Desk::new(code, *status, *x, *y))
            .collect();
        let desks_created = self.desks.create_many(&desks).await?;
        info!("Desks created: {} of {}", desks_created, desks.len());

        Ok(SeedReport {
            tenant_created,
            admin_created,
            desks_created,
        })
    }
}
