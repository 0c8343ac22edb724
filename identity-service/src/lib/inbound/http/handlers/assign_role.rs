use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::ApiReply;
use crate::domain::role::models::RoleId;
use crate::domain::role::ports::RoleManagerPort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn assign_role(
    State(state): State<AppState>,
    Json(body): Json<AssignRoleRequest>,
) -> Response {
    let result = state
        .role_manager
        .add_to_role(UserId(body.user_id), RoleId(body.role_id))
        .await;
    ApiReply(result).into_response()
}

/// HTTP request body for linking a user to a role (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    pub user_id: i32,
    pub role_id: i32,
}
