use crate::auth::jwt::{Claims, JwtService};
use crate::constants::{
    DEFAULT_DAILY_GOAL_ML, MAX_ENTRY_ML, USER_LOGGED_IN, USER_REGISTERED, WATER_LOGGED,
};
use crate::core::aggregate::{DailyTotal, group_by_day, sum_amounts, today_window};
use crate::core::errors::{FieldError, HydrologError};
use crate::core::models::{entry::WaterLogEntry, user::User};
use crate::core::units::{VolumeUnit, to_storage};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration input. `daily_goal` is expressed in the chosen display
/// unit and converted to milliliters before anything is persisted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub daily_goal: Option<f64>,
    pub unit_preference: VolumeUnit,
}

/// Today's entries plus their running total in milliliters.
#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct TodaySummary {
    pub entries: Vec<WaterLogEntry>,
    #[serde(rename = "total")]
    pub total_ml: i64,
}

pub struct HydrologService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
    jwt_service: JwtService,
    /// Offset defining where calendar days begin for this deployment.
    utc_offset: FixedOffset,
}

impl<L: LoggingService, S: Storage> HydrologService<L, S> {
    pub fn new(storage: S, logging: L, jwt_secret: String, utc_offset: FixedOffset) -> Self {
        HydrologService {
            storage,
            logging,
            jwt_service: JwtService::new(jwt_secret),
            utc_offset,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, HydrologError> {
        self.jwt_service.validate_token(token)
    }

    async fn require_user(&self, user_id: &str) -> Result<User, HydrologError> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or_else(|| HydrologError::UserNotFound(user_id.to_string()))
    }

    fn validate_string_input(
        &self,
        field: &str,
        value: &str,
        max_length: usize,
    ) -> Result<(), HydrologError> {
        if value.trim().is_empty() {
            return Err(HydrologError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(HydrologError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        Ok(())
    }

    fn validate_amount(&self, amount_ml: i64) -> Result<(), HydrologError> {
        if amount_ml <= 0 {
            return Err(HydrologError::InvalidAmount(amount_ml));
        }
        if amount_ml > MAX_ENTRY_ML {
            return Err(HydrologError::InvalidInput(
                "amount".to_string(),
                FieldError {
                    field: "amount".to_string(),
                    title: "Amount Too Large".to_string(),
                    description: format!("A single entry cannot exceed {} ml", MAX_ENTRY_ML),
                },
            ));
        }
        Ok(())
    }

    pub async fn register_user(&self, new_user: NewUser) -> Result<User, HydrologError> {
        if new_user.email.is_empty() {
            return Err(HydrologError::MissingEmail);
        }
        if !new_user.email.contains('@') || !new_user.email.contains('.') || new_user.email.len() < 5
        {
            return Err(HydrologError::InvalidEmail(new_user.email));
        }
        if new_user.password.is_empty() {
            return Err(HydrologError::InvalidInput(
                "password".to_string(),
                FieldError {
                    field: "password".to_string(),
                    title: "Invalid password".to_string(),
                    description: "Password cannot be empty".to_string(),
                },
            ));
        }
        self.validate_string_input("name", &new_user.name, 100)?;

        let daily_goal_ml = match new_user.daily_goal {
            Some(goal) if !goal.is_finite() || goal <= 0.0 => {
                return Err(HydrologError::InvalidInput(
                    "dailyGoal".to_string(),
                    FieldError {
                        field: "dailyGoal".to_string(),
                        title: "Invalid Daily Goal".to_string(),
                        description: "Daily goal must be a positive amount".to_string(),
                    },
                ));
            }
            Some(goal) => to_storage(goal, new_user.unit_preference),
            None => DEFAULT_DAILY_GOAL_ML,
        };
        if daily_goal_ml <= 0 {
            return Err(HydrologError::InvalidInput(
                "dailyGoal".to_string(),
                FieldError {
                    field: "dailyGoal".to_string(),
                    title: "Invalid Daily Goal".to_string(),
                    description: "Daily goal is below one milliliter".to_string(),
                },
            ));
        }

        let password = bcrypt::hash(&new_user.password, bcrypt::DEFAULT_COST)
            .map_err(|e| HydrologError::InternalServerError(format!("Password hashing error: {}", e)))?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: new_user.email,
            password,
            daily_goal_ml,
            unit_preference: new_user.unit_preference,
        };
        self.storage.save_user(user.clone()).await?;

        self.logging
            .log_action(
                USER_REGISTERED,
                json!({
                    "user_id": user.id,
                    "email": user.email,
                    "daily_goal_ml": user.daily_goal_ml,
                    "unit_preference": user.unit_preference,
                }),
                Some(&user.id),
            )
            .await?;

        Ok(user)
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, HydrologError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or(HydrologError::InvalidCredentials)?;

        if bcrypt::verify(password, &user.password)
            .map_err(|e| HydrologError::InternalServerError(format!("Password verification error: {}", e)))?
        {
            let token = self.jwt_service.generate_token(&user.id)?;
            self.logging
                .log_action(USER_LOGGED_IN, json!({ "user_id": user.id }), Some(&user.id))
                .await?;
            Ok(token)
        } else {
            Err(HydrologError::InvalidCredentials)
        }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, HydrologError> {
        self.storage.get_user(user_id).await
    }

    /// Records one intake event for `user_id`, timestamped now.
    pub async fn log_water(
        &self,
        user_id: &str,
        amount_ml: i64,
    ) -> Result<WaterLogEntry, HydrologError> {
        self.validate_amount(amount_ml)?;
        let user = self.require_user(user_id).await?;

        let entry = WaterLogEntry::new(&user.id, amount_ml);
        self.storage.save_entry(entry.clone()).await?;

        self.logging
            .log_action(
                WATER_LOGGED,
                json!({
                    "entry_id": entry.id,
                    "user_id": entry.user_id,
                    "amount_ml": entry.amount_ml,
                }),
                Some(&user.id),
            )
            .await?;

        Ok(entry)
    }

    /// Entries within today's window plus their total. Zero entries
    /// yields an empty list and a total of 0.
    pub async fn today_summary(&self, user_id: &str) -> Result<TodaySummary, HydrologError> {
        self.require_user(user_id).await?;
        let (start, end) = today_window(Utc::now(), self.utc_offset);
        let entries = self.storage.entries_in_range(user_id, start, end).await?;
        let total_ml = sum_amounts(&entries);
        Ok(TodaySummary { entries, total_ml })
    }

    /// Per-day totals over the user's whole history, most recent day
    /// first. A user with no entries yields an empty list.
    pub async fn daily_history(&self, user_id: &str) -> Result<Vec<DailyTotal>, HydrologError> {
        self.require_user(user_id).await?;
        let entries = self.storage.entries_for_user(user_id).await?;
        Ok(group_by_day(&entries, self.utc_offset))
    }
}
