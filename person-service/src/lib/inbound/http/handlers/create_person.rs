use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PersonData;
use crate::domain::person::models::validate_credentials;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePersonRequest {
    pub login: Option<String>,
    pub password: Option<String>,
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(body): Json<CreatePersonRequest>,
) -> Result<ApiSuccess<PersonData>, ApiError> {
    let errors = validate_credentials(body.login.as_deref(), body.password.as_deref());
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    // Both present after validation
    let login = body.login.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    state
        .person_service
        .create_person(login, password)
        .await
        .map_err(ApiError::from)
        .map(|ref person| ApiSuccess::new(StatusCode::CREATED, person.into()))
}
