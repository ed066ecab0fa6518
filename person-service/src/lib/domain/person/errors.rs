use thiserror::Error;

use crate::domain::person::models::MIN_PASSWORD_LENGTH;

/// Top-level error for all person operations.
#[derive(Debug, Clone, Error)]
pub enum PersonError {
    // Sign-up validation, each a distinct failure checked in order
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid password. Password length must be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,

    // Domain-level errors
    #[error("Login already exists: {0}")]
    DuplicateLogin(String),

    #[error("Person with id {0} not found")]
    NotFound(i32),

    #[error("Person with login {0} not found")]
    LoginNotFound(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Infrastructure errors
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}
