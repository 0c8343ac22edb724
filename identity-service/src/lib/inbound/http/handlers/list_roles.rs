use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;

use super::ApiReply;
use super::RoleData;
use crate::domain::role::ports::RoleManagerPort;
use crate::inbound::http::router::AppState;

pub async fn list_roles(State(state): State<AppState>) -> Response {
    let result = state.role_manager.get_all_roles().await;
    ApiReply(result.map(|roles| roles.iter().map(RoleData::from).collect::<Vec<_>>()))
        .into_response()
}
