use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::policy::Access;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified identity into handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// Policy enforcement middleware, layered over every route.
///
/// Looks the request up in the access policy before handler dispatch.
/// Public routes pass through untouched; protected routes must carry a
/// valid bearer token, whose subject is bound into request extensions.
/// A request failing here never reaches a handler.
pub async fn enforce_access_policy(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let access = state.policy.authorize(req.method(), req.uri().path());
    if access == Access::Public {
        return Ok(next.run(req).await);
    }

    let token = extract_token_from_header(&req)?;

    // Stateless: signature and expiry checked against the embedded
    // claims, no store lookup
    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { login: claims.sub });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
