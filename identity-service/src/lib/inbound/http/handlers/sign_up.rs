use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiReply;
use super::UserData;
use crate::domain::result::OpResult;
use crate::domain::role::models::RoleId;
use crate::domain::role::ports::RoleManagerPort;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordPolicyError;
use crate::domain::user::errors::PhoneNumberError;
use crate::domain::user::errors::UserNameError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserManagerPort;
use crate::inbound::http::router::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Response {
    let new_user = match body.try_into_new_user() {
        Ok(new_user) => new_user,
        Err(e) => return ApiReply(OpResult::<UserData>::failure(e.to_string())).into_response(),
    };

    let created = state.user_manager.create(new_user).await;

    // Every fresh account starts in the configured default role; a failed
    // link is logged, not surfaced, since the account itself exists.
    if created.is_success {
        if let Some(user) = created.data.as_ref() {
            let assigned = state
                .role_manager
                .add_to_role(user.id, RoleId(state.default_role_id))
                .await;
            if !assigned.is_success {
                tracing::warn!(
                    user_id = %user.id,
                    role_id = state.default_role_id,
                    "Default role assignment failed after signup"
                );
            }
        }
    }

    ApiReply(created.map(|ref user| UserData::from(user))).into_response()
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    user_name: String,
    email: String,
    phone_number: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignUpError {
    #[error("Invalid user name: {0}")]
    UserName(#[from] UserNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone number: {0}")]
    PhoneNumber(#[from] PhoneNumberError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl SignUpRequest {
    fn try_into_new_user(self) -> Result<NewUser, ParseSignUpError> {
        let user_name = UserName::new(self.user_name)?;
        let email = EmailAddress::new(self.email)?;
        let phone_number = PhoneNumber::new(self.phone_number)?;
        let password = Password::new(self.password)?;
        Ok(NewUser::new(user_name, email, phone_number, password))
    }
}
