pub mod in_memory;

use crate::core::errors::HydrologError;
use crate::core::models::audit::AuditRecord;
use async_trait::async_trait;

#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        user_id: Option<&str>,
    ) -> Result<(), HydrologError>;
    async fn get_logs(&self) -> Result<Vec<AuditRecord>, HydrologError>;
}
