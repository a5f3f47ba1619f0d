use crate::core::errors::HydrologError;
use crate::core::models::{entry::WaterLogEntry, user::User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<String, User>>>,
    users_by_email: Arc<RwLock<HashMap<String, User>>>,
    entries: Arc<RwLock<Vec<WaterLogEntry>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<(), HydrologError> {
        let mut users_by_email = self.users_by_email.write().await;
        if users_by_email.contains_key(&user.email) {
            return Err(HydrologError::EmailAlreadyRegistered(user.email));
        }
        users_by_email.insert(user.email.clone(), user.clone());
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, HydrologError> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, HydrologError> {
        // For production: Use database index on email
        Ok(self.users_by_email.read().await.get(email).cloned())
    }

    async fn save_entry(&self, entry: WaterLogEntry) -> Result<(), HydrologError> {
        // Entries are append-only; there is no update or delete path.
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn entries_in_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WaterLogEntry>, HydrologError> {
        // For production: Use database query with index on (user_id, date)
        let mut entries: Vec<WaterLogEntry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id == user_id && e.logged_at >= start && e.logged_at < end)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.logged_at);
        Ok(entries)
    }

    async fn entries_for_user(&self, user_id: &str) -> Result<Vec<WaterLogEntry>, HydrologError> {
        let mut entries: Vec<WaterLogEntry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.logged_at);
        Ok(entries)
    }
}
