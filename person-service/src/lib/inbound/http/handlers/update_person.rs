use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::person::models::validate_for_update;
use crate::domain::person::models::UpdatePersonCommand;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePersonRequest {
    pub id: Option<i32>,
    pub login: Option<String>,
    pub password: Option<String>,
}

pub async fn update_person(
    State(state): State<AppState>,
    Json(body): Json<UpdatePersonRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    let errors = validate_for_update(body.id, body.login.as_deref(), body.password.as_deref());
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let command = UpdatePersonCommand {
        id: body.id.unwrap_or_default(),
        login: body.login.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
    };

    state
        .person_service
        .update_person(command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
