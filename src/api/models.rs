use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::HydrologError;
use crate::core::models::user::User;
use crate::core::units::VolumeUnit;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Daily intake goal in the chosen display unit; defaults to 2000 ml.
    pub daily_goal: Option<f64>,
    pub unit_preference: VolumeUnit,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddWaterRequest {
    /// Amount in milliliters; the client converts display units first.
    pub amount: i64,
}

/// User profile as exposed over the API; the password hash never leaves
/// the service.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub daily_goal_ml: i64,
    pub unit_preference: VolumeUnit,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            daily_goal_ml: user.daily_goal_ml,
            unit_preference: user.unit_preference,
        }
    }
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for HydrologError to implement IntoResponse
pub struct ApiError(pub HydrologError);

impl From<HydrologError> for ApiError {
    fn from(err: HydrologError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            HydrologError::MissingEmail => (StatusCode::BAD_REQUEST, "Email is required".to_string()),
            HydrologError::InvalidEmail(email) => {
                (StatusCode::BAD_REQUEST, format!("Invalid email: {}", email))
            }
            HydrologError::EmailAlreadyRegistered(email) => {
                (StatusCode::CONFLICT, format!("Email {} already registered", email))
            }
            HydrologError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string())
            }
            HydrologError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, format!("Unauthorized: {}", msg)),
            HydrologError::UserNotFound(id) => (StatusCode::NOT_FOUND, format!("User {} not found", id)),
            HydrologError::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                format!("Amount must be a positive number of milliliters, got {}", amount),
            ),
            HydrologError::UnknownUnit(unit) => (StatusCode::BAD_REQUEST, format!("Unknown unit: {}", unit)),
            HydrologError::InvalidInput(field, msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {:?}", field, msg),
            ),
            HydrologError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
            HydrologError::StorageError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg))
            }
            HydrologError::LoggingError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Logging error: {}", msg))
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
