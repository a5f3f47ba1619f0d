use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One structured audit record for a domain action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: String,
    pub action: String,
    pub user_id: Option<String>,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}
