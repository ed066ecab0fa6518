use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use serde_json::Value;

/// Public error-reporting endpoint.
///
/// Clients redirected here after a failed request get a stable generic
/// body; the route stays reachable without credentials.
pub async fn error_page() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "No error details available"
        })),
    )
}
