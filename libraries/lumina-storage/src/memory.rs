//! In-memory user store

use async_trait::async_trait;
use lumina_core::{RecordStore, Result, UserRecord};
use tokio::sync::RwLock;

/// Process-local user store
///
/// Same whole-collection contract as the file store, without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[UserRecord]) -> Result<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::{CreateUser, UserId};

    fn record(position: usize, email: &str) -> UserRecord {
        UserRecord::create(
            UserId::from_position(position),
            CreateUser {
                email: email.to_string(),
                password_hash: "hash".to_string(),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_collection() {
        let store = MemoryStore::with_records(vec![record(0, "a@b.com")]);

        let replacement = vec![record(0, "c@d.com"), record(1, "e@f.com")];
        store.save(&replacement).await.unwrap();

        assert_eq!(store.load().await.unwrap(), replacement);
    }
}
