use crate::core::units::VolumeUnit;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored user profile. `password` holds the bcrypt hash, never the
/// plaintext; this type never crosses the API boundary directly.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub daily_goal_ml: i64,
    pub unit_preference: VolumeUnit,
}
