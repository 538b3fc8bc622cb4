use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    /// Identity provider tenant identifier (unique)
    pub tenant_id: String,
    /// Email domain of the organization
    pub domain: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(tenant_id: &str, domain: &str, display_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id: tenant_id.to_string(),
            domain: domain.to_string(),
            display_name: display_name.to_string(),
            created_at: Utc::now(),
        }
    }
}
