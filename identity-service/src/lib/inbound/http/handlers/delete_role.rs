use axum::extract::Path;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiReply;
use crate::domain::role::models::RoleId;
use crate::domain::role::ports::RoleManagerPort;
use crate::inbound::http::router::AppState;

pub async fn delete_role(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let result = state.role_manager.delete_role(RoleId(id)).await;
    ApiReply(result).into_response()
}
