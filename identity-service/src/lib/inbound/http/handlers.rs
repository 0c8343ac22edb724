use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::result::OpResult;
use crate::domain::role::models::Role;
use crate::domain::signin::models::AuthenticatedSession;
use crate::domain::user::models::User;

pub mod assign_role;
pub mod create_role;
pub mod delete_role;
pub mod delete_user;
pub mod get_user;
pub mod list_roles;
pub mod list_users;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;
pub mod update_role;
pub mod update_user;
pub mod user_roles;

/// Response wrapper putting the result envelope in the body with the
/// status derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply<T>(pub OpResult<T>);

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        (status_for(&self.0), Json(self.0)).into_response()
    }
}

/// Derive the HTTP status from the envelope alone.
///
/// Clients re-derive outcomes the same way, so the substrings here are
/// part of the contract: "unexpected" marks server faults, "not found"
/// marks missing records, anything else is a business failure.
pub fn status_for<T>(result: &OpResult<T>) -> StatusCode {
    if result.is_success {
        return StatusCode::OK;
    }

    let lowered = result.error.as_deref().unwrap_or_default().to_lowercase();
    if lowered.contains("unexpected") {
        StatusCode::INTERNAL_SERVER_ERROR
    } else if lowered.contains("not found") {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// Response for a request abandoned by cooperative cancellation. Uses 499
/// (client closed request) rather than reporting a server fault.
pub fn request_aborted() -> Response {
    let status = StatusCode::from_u16(499).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(OpResult::<()>::failure("Request aborted."))).into_response()
}

/// Outward view of a user. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_created: DateTime<Utc>,
    pub roles: Vec<String>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            user_name: user.user_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            phone_number: user.phone_number.as_str().to_string(),
            date_created: user.date_created,
            roles: user.roles.clone(),
        }
    }
}

/// Outward view of a role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleData {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date_created: DateTime<Utc>,
}

impl From<&Role> for RoleData {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.0,
            name: role.name.as_str().to_string(),
            description: role.description.as_str().to_string(),
            date_created: role.date_created,
        }
    }
}

/// Sign-in response payload: the token plus the identity it names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub token: String,
    pub user: SessionUserData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserData {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_created: DateTime<Utc>,
    pub roles: Vec<String>,
}

impl From<AuthenticatedSession> for SessionData {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            token: session.token,
            user: SessionUserData {
                id: session.user.id,
                user_name: session.user.user_name,
                email: session.user.email,
                phone_number: session.user.phone_number,
                date_created: session.user.date_created,
                roles: session.user.roles,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success_is_ok() {
        assert_eq!(status_for(&OpResult::success(1)), StatusCode::OK);
    }

    #[test]
    fn test_status_unexpected_is_server_error() {
        let result: OpResult<i32> = OpResult::failure("An unexpected error occurred.");
        assert_eq!(status_for(&result), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_not_found_maps_to_404() {
        let result: OpResult<i32> = OpResult::failure("User is not found.");
        assert_eq!(status_for(&result), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_status_plain_failure_is_bad_request() {
        let result: OpResult<i32> = OpResult::failure("Email already exists.");
        assert_eq!(status_for(&result), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_roles_read_failure_is_not_a_404() {
        // "No roles found." must not trip the "not found" substring.
        let result: OpResult<i32> = OpResult::failure("No roles found.");
        assert_eq!(status_for(&result), StatusCode::BAD_REQUEST);
    }
}
