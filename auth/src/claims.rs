use std::collections::HashSet;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims issued for an authenticated identity.
///
/// Carries the standard registered claims plus the email, username, and
/// role list the gateway needs to make authorization decisions without a
/// second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityClaims {
    /// Subject: the user's numeric identifier, as a string
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Email address the subject signed in with
    pub email: String,

    /// Display username
    pub username: String,

    /// Role names granted to the subject at issuance time
    #[serde(default)]
    pub roles: Vec<String>,
}

impl IdentityClaims {
    /// Create claims for a signed-in user with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - Numeric user identifier (becomes `sub`)
    /// * `email` - Email address
    /// * `username` - Display name
    /// * `roles` - Role names granted to the user
    /// * `valid_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, exp, and iat populated
    pub fn new(
        user_id: i32,
        email: String,
        username: String,
        roles: Vec<String>,
        valid_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(valid_hours);

        Self {
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: None,
            email,
            username,
            roles,
        }
    }

    /// Set the issuer.
    pub fn with_issuer(mut self, iss: String) -> Self {
        self.iss = Some(iss);
        self
    }

    /// Parse the subject back into a numeric user id.
    ///
    /// # Returns
    /// The user id, or None if the subject is not a valid integer
    pub fn subject_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    /// Role names as a set, for membership checks.
    pub fn role_set(&self) -> HashSet<String> {
        self.roles.iter().cloned().collect()
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_subject_and_window() {
        let claims = IdentityClaims::new(
            42,
            "bob@example.com".to_string(),
            "bob".to_string(),
            vec!["MANAGER".to_string()],
            24,
        );

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.subject_id(), Some(42));
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_role_set_membership() {
        let claims = IdentityClaims::new(
            1,
            "a@example.com".to_string(),
            "a".to_string(),
            vec!["EMPLOYEE".to_string(), "MANAGER".to_string()],
            1,
        );

        let roles = claims.role_set();
        assert!(roles.contains("MANAGER"));
        assert!(!roles.contains("HR ADMIN"));
    }

    #[test]
    fn test_subject_id_rejects_non_numeric() {
        let mut claims = IdentityClaims::new(1, "a@b.com".to_string(), "a".to_string(), vec![], 1);
        claims.sub = "not-a-number".to_string();
        assert_eq!(claims.subject_id(), None);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = IdentityClaims::new(1, "a@b.com".to_string(), "a".to_string(), vec![], 1);
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
