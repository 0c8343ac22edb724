use axum::extract::Path;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiReply;
use super::UserData;
use crate::domain::result::OpResult;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PhoneNumberError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserUpdate;
use crate::domain::user::ports::UserManagerPort;
use crate::inbound::http::router::AppState;

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserRequest>,
) -> Response {
    let update = match body.try_into_update() {
        Ok(update) => update,
        Err(e) => return ApiReply(OpResult::<UserData>::failure(e.to_string())).into_response(),
    };

    let result = state.user_manager.update(UserId(id), update).await;
    ApiReply(result.map(|ref user| UserData::from(user))).into_response()
}

/// HTTP request body for updating the mutable user fields (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    email: String,
    phone_number: String,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateUserError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone number: {0}")]
    PhoneNumber(#[from] PhoneNumberError),
}

impl UpdateUserRequest {
    fn try_into_update(self) -> Result<UserUpdate, ParseUpdateUserError> {
        Ok(UserUpdate {
            email: EmailAddress::new(self.email)?,
            phone_number: PhoneNumber::new(self.phone_number)?,
        })
    }
}
