use axum::extract::Path;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiReply;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserManagerPort;
use crate::inbound::http::router::AppState;

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let result = state.user_manager.delete(UserId(id)).await;
    ApiReply(result).into_response()
}
