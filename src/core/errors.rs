use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum HydrologError {
    /// Email field is empty
    #[error("Email is required")]
    MissingEmail,

    /// Email format is invalid
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Email is already registered
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Login failed; deliberately does not say whether email or password was wrong
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Bearer credential is missing, malformed, or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Logged amount must be a strictly positive number of milliliters
    #[error("Invalid amount: {0} ml")]
    InvalidAmount(i64),

    /// Unit string is not one of the supported display units
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Internal server error (e.g., unexpected failure)
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}
