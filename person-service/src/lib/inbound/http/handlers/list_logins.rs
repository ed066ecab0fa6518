use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PersonData;
use crate::inbound::http::router::AppState;

/// GET /users/all — same data as /person/, never the hashes.
pub async fn list_logins(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PersonData>>, ApiError> {
    state
        .person_service
        .list_persons()
        .await
        .map_err(ApiError::from)
        .map(|persons| {
            ApiSuccess::new(
                StatusCode::OK,
                persons.iter().map(PersonData::from).collect(),
            )
        })
}
