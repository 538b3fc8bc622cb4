#![allow(dead_code)]

use ns_core::{AdminRecord, Desk, DeskStatus, Tenant};
use ns_db::SeedOptions;

pub const TEST_TENANT_ID: &str = "11111111-2222-3333-4444-555555555555";

pub fn create_test_tenant() -> Tenant {
    Tenant::new(TEST_TENANT_ID, "contoso.com", "Test Tenant")
}

pub fn create_test_admin(email: &str) -> AdminRecord {
    AdminRecord::new(email, "Test Admin", "test")
}

pub fn create_test_desk(code: &str) -> Desk {
    Desk::new(code, DeskStatus::Available, 0.5, 0.5)
}

pub fn create_seed_options() -> SeedOptions {
    SeedOptions {
        tenant_id: TEST_TENANT_ID.to_string(),
        admin_email: "Owner@Contoso.com".to_string(),
    }
}
