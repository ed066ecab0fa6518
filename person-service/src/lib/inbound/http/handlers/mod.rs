use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::person::errors::PersonError;
use crate::domain::person::models::FieldError;
use crate::domain::person::models::Person;

pub mod create_person;
pub mod delete_person;
pub mod error_page;
pub mod get_person;
pub mod list_logins;
pub mod list_persons;
pub mod patch_person;
pub mod sign_in;
pub mod sign_up;
pub mod update_person;

/// Wire representation of a person. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonData {
    pub id: i32,
    pub login: String,
}

impl From<&Person> for PersonData {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            login: person.login.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    /// Field-level failures, rendered as an ordered list of
    /// `{"<field>": "<message>. Actual value: <value>"}` objects.
    Validation(Vec<FieldError>),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(errors) => {
                tracing::warn!(fields = errors.len(), "Validation failed");
                let body: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        let mut entry = serde_json::Map::new();
                        entry.insert(
                            e.field.to_string(),
                            serde_json::Value::String(e.render()),
                        );
                        serde_json::Value::Object(entry)
                    })
                    .collect();
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl From<PersonError> for ApiError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::MissingField(_) | PersonError::WeakPassword => {
                ApiError::BadRequest(err.to_string())
            }
            PersonError::DuplicateLogin(_) => ApiError::Conflict(err.to_string()),
            PersonError::NotFound(_) | PersonError::LoginNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            // Infrastructure details stay behind a generic message; no
            // secret material ever reaches a client payload
            PersonError::Password(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
            PersonError::StoreUnavailable(_) | PersonError::Database(_) => {
                tracing::error!(error = %err, "Store failure surfaced to client");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}
