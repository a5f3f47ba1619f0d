use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single recorded water-intake event. Entries are append-only and
/// immutable once written. Wire names follow the stored document fields
/// (`_id`, `userId`, `amount`, `date`).
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct WaterLogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Amount in milliliters, regardless of the unit the user entered.
    #[serde(rename = "amount")]
    pub amount_ml: i64,
    #[serde(rename = "date")]
    pub logged_at: DateTime<Utc>,
}

impl WaterLogEntry {
    pub fn new(user_id: &str, amount_ml: i64) -> Self {
        WaterLogEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            amount_ml,
            logged_at: Utc::now(),
        }
    }
}
