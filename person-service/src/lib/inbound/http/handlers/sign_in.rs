use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::person::errors::PersonError;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<ApiSuccess<SignInResponse>, ApiError> {
    // Unknown login and wrong password are indistinguishable to the
    // client; no user enumeration through this endpoint
    let person = state
        .person_service
        .get_by_login(&body.login)
        .await
        .map_err(|e| match e {
            PersonError::LoginNotFound(_) => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let token = state
        .authenticator
        .authenticate(&body.password, &person.password_hash, &person.login)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            auth::AuthenticationError::PasswordError(_)
            | auth::AuthenticationError::JwtError(_) => {
                tracing::error!(error = %e, "Token issuance failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        })?;

    Ok(ApiSuccess::new(StatusCode::OK, SignInResponse { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInResponse {
    pub token: String,
}
