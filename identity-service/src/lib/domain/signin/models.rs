use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::User;

/// Credentials presented at sign-in, still unverified.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The signed token plus the identity it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedSession {
    pub token: String,
    pub user: SessionUser,
}

/// Outward view of the signed-in user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_created: DateTime<Utc>,
    pub roles: Vec<String>,
}

impl SessionUser {
    /// Build the session view from a validated user and its role list.
    pub fn from_user(user: &User, roles: Vec<String>) -> Self {
        Self {
            id: user.id.0,
            user_name: user.user_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            phone_number: user.phone_number.as_str().to_string(),
            date_created: user.date_created,
            roles,
        }
    }
}
