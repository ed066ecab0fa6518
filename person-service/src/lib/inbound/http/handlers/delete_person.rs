use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .person_service
        .delete_person(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
