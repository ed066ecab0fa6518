use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::any;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_person::create_person;
use super::handlers::delete_person::delete_person;
use super::handlers::error_page::error_page;
use super::handlers::get_person::get_person;
use super::handlers::list_logins::list_logins;
use super::handlers::list_persons::list_persons;
use super::handlers::patch_person::patch_person;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::update_person::update_person;
use super::middleware::enforce_access_policy;
use super::policy::AccessPolicy;
use crate::domain::person::ports::PersonServicePort;

/// Shared state handed to every handler and to the policy middleware.
///
/// All collaborators are built explicitly at startup and passed in; no
/// ambient registry.
#[derive(Clone)]
pub struct AppState {
    pub person_service: Arc<dyn PersonServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub policy: Arc<AccessPolicy>,
}

pub fn create_router(
    person_service: Arc<dyn PersonServicePort>,
    authenticator: Arc<Authenticator>,
    policy: Arc<AccessPolicy>,
) -> Router {
    let state = AppState {
        person_service,
        authenticator,
        policy,
    };

    // Headers deliberately left out of the span: Authorization carries
    // the bearer token
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/users/sign-up", post(sign_up))
        .route("/users/all", get(list_logins))
        .route("/login", post(sign_in))
        .route(
            "/person/",
            get(list_persons).post(create_person).put(update_person),
        )
        .route(
            "/person/:id",
            get(get_person).patch(patch_person).delete(delete_person),
        )
        .route("/error", any(error_page))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_access_policy,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
