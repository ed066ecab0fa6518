use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PersonData;
use crate::domain::person::models::SignUpCommand;
use crate::inbound::http::router::AppState;

/// Raw sign-up body. Fields stay optional so a missing field is reported
/// as such rather than as a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequest {
    pub login: Option<String>,
    pub password: Option<String>,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<ApiSuccess<PersonData>, ApiError> {
    state
        .person_service
        .sign_up(SignUpCommand {
            login: body.login,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)
        .map(|ref person| ApiSuccess::new(StatusCode::OK, person.into()))
}
