use axum::extract::Path;
use axum::extract::State;
use axum::response::Response;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;

use super::denied;
use super::reply;
use crate::domain::authz::policy::authorize;
use crate::domain::authz::policy::Caller;
use crate::domain::authz::policy::Requirement;
use crate::inbound::http::router::AppState;

/// Register a new person. Admin-scoped: only the fully-privileged role may
/// create accounts through the gateway.
pub async fn sign_up(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.admin())) {
        return denied(denial);
    }

    reply(state.identity.post("/api/users/signup", body).await)
}

/// Exchange credentials for a token. Public: the caller has no identity
/// yet.
pub async fn sign_in(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    reply(state.identity.post("/api/users/signin", body).await)
}

/// The caller's own record; the target is the authenticated identity by
/// construction.
pub async fn me(State(state): State<AppState>, Extension(caller): Extension<Caller>) -> Response {
    reply(
        state
            .identity
            .get(&format!("/api/users/{}", caller.user_id))
            .await,
    )
}

pub async fn get_person(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> Response {
    let requirement = Requirement::SelfOrRole {
        target: id,
        roles: state.policy.elevated(),
    };
    if let Err(denial) = authorize(&caller, &requirement) {
        return denied(denial);
    }

    reply(state.identity.get(&format!("/api/users/{}", id)).await)
}

pub async fn update_person(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Response {
    let requirement = Requirement::SelfOrRole {
        target: id,
        roles: state.policy.elevated(),
    };
    if let Err(denial) = authorize(&caller, &requirement) {
        return denied(denial);
    }

    reply(
        state
            .identity
            .put(&format!("/api/users/{}", id), body)
            .await,
    )
}

/// Reset a person's password. Self-service unless the caller is the admin
/// role; the authorized path id is what gets forwarded, never a body id.
pub async fn reset_password(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    Json(body): Json<ResetPasswordRequest>,
) -> Response {
    let requirement = Requirement::SelfOrRole {
        target: id,
        roles: state.policy.admin(),
    };
    if let Err(denial) = authorize(&caller, &requirement) {
        return denied(denial);
    }

    let forwarded = json!({ "id": id, "newPassword": body.new_password });
    reply(
        state
            .identity
            .post("/api/users/reset-password", forwarded)
            .await,
    )
}

pub async fn delete_person(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.admin())) {
        return denied(denial);
    }

    reply(state.identity.delete(&format!("/api/users/{}", id)).await)
}

pub async fn list_people(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.elevated())) {
        return denied(denial);
    }

    reply(state.identity.get("/api/users").await)
}

/// HTTP request body for a password reset (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}
