use axum::extract::Path;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiReply;
use super::UserData;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserManagerPort;
use crate::inbound::http::router::AppState;

pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let result = state.user_manager.find_by_id(UserId(id)).await;
    ApiReply(result.map(|ref user| UserData::from(user))).into_response()
}
