use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PersonData;
use crate::domain::person::models::PersonPatch;
use crate::inbound::http::router::AppState;

/// Patch body: only fields present in the JSON are overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct PatchPersonRequest {
    pub login: Option<String>,
    pub password: Option<String>,
}

pub async fn patch_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<PatchPersonRequest>,
) -> Result<ApiSuccess<PersonData>, ApiError> {
    state
        .person_service
        .patch_person(
            id,
            PersonPatch {
                login: body.login,
                password: body.password,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref person| ApiSuccess::new(StatusCode::OK, person.into()))
}
