use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A known administrator. Presence of a record for an email grants the admin role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub id: Uuid,
    /// Lookup key, always stored lowercase
    pub email: String,
    pub display_name: String,
    /// Who provisioned this admin ("seed" for the seed script)
    pub added_by: String,
    pub created_at: DateTime<Utc>,
}

impl AdminRecord {
    pub fn new(email: &str, display_name: &str, added_by: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.trim().to_lowercase(),
            display_name: display_name.to_string(),
            added_by: added_by.to_string(),
            created_at: Utc::now(),
        }
    }
}
