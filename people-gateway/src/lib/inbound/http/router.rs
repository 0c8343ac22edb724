use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::people::delete_person;
use super::handlers::people::get_person;
use super::handlers::people::list_people;
use super::handlers::people::me;
use super::handlers::people::reset_password;
use super::handlers::people::sign_in;
use super::handlers::people::sign_up;
use super::handlers::people::update_person;
use super::handlers::roles::assign_role;
use super::handlers::roles::create_role;
use super::handlers::roles::delete_role;
use super::handlers::roles::list_roles;
use super::handlers::roles::person_roles;
use super::handlers::roles::update_role;
use super::middleware::authenticate as auth_middleware;
use crate::domain::authz::policy::RolePolicy;
use crate::outbound::identity::IdentityApi;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityApi>,
    pub jwt: Arc<JwtHandler>,
    pub policy: Arc<RolePolicy>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/api/people/signin", post(sign_in));

    let protected_routes = Router::new()
        .route("/api/people/signup", post(sign_up))
        .route("/api/people/me", get(me))
        .route("/api/people", get(list_people))
        .route("/api/people/roles", get(list_roles))
        .route("/api/people/roles", post(create_role))
        .route("/api/people/roles/assign", post(assign_role))
        .route("/api/people/roles/:id", get(person_roles))
        .route("/api/people/roles/:id", put(update_role))
        .route("/api/people/roles/:id", delete(delete_role))
        .route("/api/people/:id", get(get_person))
        .route("/api/people/:id", put(update_person))
        .route("/api/people/:id", delete(delete_person))
        .route("/api/people/:id/reset-password", post(reset_password))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
