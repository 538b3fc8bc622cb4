use crate::{AdminStore, Result as AuthErrorResult};

use ns_core::AdminRecord;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local admin store, used for tests and single-binary setups
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdminStore {
    records: Arc<RwLock<HashMap<String, AdminRecord>>>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: AdminRecord) {
        let key = record.email.to_lowercase();
        self.records.write().await.insert(key, record);
    }

    pub async fn remove(&self, email: &str) -> Option<AdminRecord> {
        self.records.write().await.remove(&email.to_lowercase())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn find_by_email(&self, email: &str) -> AuthErrorResult<Option<AdminRecord>> {
        Ok(self.records.read().await.get(&email.to_lowercase()).cloned())
    }
}
