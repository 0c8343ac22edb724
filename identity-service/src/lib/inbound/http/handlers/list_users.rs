use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiReply;
use super::UserData;
use crate::domain::user::ports::UserManagerPort;
use crate::inbound::http::router::AppState;

pub async fn list_users(State(state): State<AppState>) -> Response {
    let result = state.user_manager.get_all_users().await;
    ApiReply(result.map(|users| users.iter().map(UserData::from).collect::<Vec<_>>()))
        .into_response()
}
