use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::ApiReply;
use crate::domain::result::OpResult;
use crate::domain::user::models::Password;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserManagerPort;
use crate::inbound::http::router::AppState;

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Response {
    let password = match Password::new(body.new_password) {
        Ok(password) => password,
        Err(e) => {
            return ApiReply(OpResult::<bool>::failure(format!("Invalid password: {}", e)))
                .into_response()
        }
    };

    let result = state
        .user_manager
        .reset_password(UserId(body.id), &password)
        .await;

    ApiReply(result).into_response()
}

/// HTTP request body for a password reset (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub id: i32,
    pub new_password: String,
}
