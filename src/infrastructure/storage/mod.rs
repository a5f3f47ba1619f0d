use crate::core::errors::HydrologError;
use crate::core::models::{entry::WaterLogEntry, user::User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), HydrologError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, HydrologError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, HydrologError>;
    async fn save_entry(&self, entry: WaterLogEntry) -> Result<(), HydrologError>;
    /// Entries for one user whose timestamp falls in [start, end),
    /// ordered by timestamp ascending.
    async fn entries_in_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WaterLogEntry>, HydrologError>;
    /// All entries for one user, ordered by timestamp ascending.
    async fn entries_for_user(&self, user_id: &str) -> Result<Vec<WaterLogEntry>, HydrologError>;
}

pub mod in_memory;
