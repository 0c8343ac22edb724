use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::assign_role::assign_role;
use super::handlers::create_role::create_role;
use super::handlers::delete_role::delete_role;
use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::list_roles::list_roles;
use super::handlers::list_users::list_users;
use super::handlers::reset_password::reset_password;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::update_role::update_role;
use super::handlers::update_user::update_user;
use super::handlers::user_roles::user_roles;
use crate::domain::role::manager::RoleManager;
use crate::domain::signin::pipeline::SignInPipeline;
use crate::domain::user::manager::UserManager;
use crate::outbound::repositories::PostgresRoleStore;
use crate::outbound::repositories::PostgresUserStore;
use crate::outbound::security::Argon2CredentialHasher;
use crate::outbound::token::JwtTokenIssuer;

pub type AppUserManager = UserManager<PostgresUserStore, Argon2CredentialHasher>;
pub type AppRoleManager = RoleManager<PostgresRoleStore>;
pub type AppSignInPipeline = SignInPipeline<AppUserManager, AppRoleManager, JwtTokenIssuer>;

#[derive(Clone)]
pub struct AppState {
    pub user_manager: Arc<AppUserManager>,
    pub role_manager: Arc<AppRoleManager>,
    pub sign_in: Arc<AppSignInPipeline>,
    pub default_role_id: i32,
    pub shutdown: CancellationToken,
}

pub fn create_router(state: AppState) -> Router {
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
        .route("/api/users/signup", post(sign_up))
        .route("/api/users/signin", post(sign_in))
        .route("/api/users/reset-password", post(reset_password))
        .route("/api/users", get(list_users))
        .route("/api/users/:id", get(get_user))
        .route("/api/users/:id", put(update_user))
        .route("/api/users/:id", delete(delete_user))
        .route("/api/roles", get(list_roles))
        .route("/api/roles", post(create_role))
        .route("/api/roles/user/:user_id", get(user_roles))
        .route("/api/roles/assign", post(assign_role))
        .route("/api/roles/:id", put(update_role))
        .route("/api/roles/:id", delete(delete_role))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
