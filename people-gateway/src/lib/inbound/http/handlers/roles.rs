use axum::extract::Path;
use axum::extract::State;
use axum::response::Response;
use axum::Extension;
use axum::Json;
use serde_json::Value;

use super::denied;
use super::reply;
use crate::domain::authz::policy::authorize;
use crate::domain::authz::policy::Caller;
use crate::domain::authz::policy::Requirement;
use crate::inbound::http::router::AppState;

pub async fn list_roles(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.elevated())) {
        return denied(denial);
    }

    reply(state.identity.get("/api/roles").await)
}

pub async fn person_roles(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(user_id): Path<i32>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.elevated())) {
        return denied(denial);
    }

    reply(
        state
            .identity
            .get(&format!("/api/roles/user/{}", user_id))
            .await,
    )
}

pub async fn create_role(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.elevated())) {
        return denied(denial);
    }

    reply(state.identity.post("/api/roles", body).await)
}

pub async fn update_role(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.elevated())) {
        return denied(denial);
    }

    reply(
        state
            .identity
            .put(&format!("/api/roles/{}", id), body)
            .await,
    )
}

/// Role deletion is destructive and cascades link cleanup; admin only.
pub async fn delete_role(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.admin())) {
        return denied(denial);
    }

    reply(state.identity.delete(&format!("/api/roles/{}", id)).await)
}

pub async fn assign_role(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denial) = authorize(&caller, &Requirement::AnyRole(state.policy.elevated())) {
        return denied(denial);
    }

    reply(state.identity.post("/api/roles/assign", body).await)
}
