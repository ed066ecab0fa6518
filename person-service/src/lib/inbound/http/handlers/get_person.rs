use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PersonData;
use crate::inbound::http::router::AppState;

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiSuccess<PersonData>, ApiError> {
    state
        .person_service
        .get_person(id)
        .await
        .map_err(ApiError::from)
        .map(|ref person| ApiSuccess::new(StatusCode::OK, person.into()))
}
