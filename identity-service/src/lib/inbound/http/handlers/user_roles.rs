use axum::extract::Path;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiReply;
use crate::domain::role::ports::RoleManagerPort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn user_roles(State(state): State<AppState>, Path(user_id): Path<i32>) -> Response {
    let result = state.role_manager.get_user_roles(UserId(user_id)).await;
    ApiReply(result).into_response()
}
