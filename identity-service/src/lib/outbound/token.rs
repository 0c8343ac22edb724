use auth::IdentityClaims;
use auth::JwtHandler;

use crate::domain::result::OpResult;
use crate::domain::signin::ports::TokenIssuer;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// JWT token issuer, adapting the shared auth library to the domain port.
///
/// Encoding errors never escape; they fold into the failure envelope the
/// pipeline normalizes.
pub struct JwtTokenIssuer {
    handler: JwtHandler,
    valid_hours: i64,
    issuer: Option<String>,
}

impl JwtTokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret shared with the gateway
    /// * `valid_hours` - Token lifetime
    /// * `issuer` - Optional `iss` claim value
    pub fn new(secret: &[u8], valid_hours: i64, issuer: Option<String>) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            valid_hours,
            issuer,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn generate_token(&self, subject: UserId, user: &User, roles: &[String]) -> OpResult<String> {
        let mut claims = IdentityClaims::new(
            subject.0,
            user.email.as_str().to_string(),
            user.user_name.as_str().to_string(),
            roles.to_vec(),
            self.valid_hours,
        );
        if let Some(issuer) = &self.issuer {
            claims = claims.with_issuer(issuer.clone());
        }

        match self.handler.encode(&claims) {
            Ok(token) => OpResult::success(token),
            Err(e) => {
                tracing::error!(error = %e, user_id = %subject, "Token encoding failed");
                OpResult::failure("Token generation failed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::PhoneNumber;
    use crate::domain::user::models::UserName;

    fn sample_user() -> User {
        User {
            id: UserId(7),
            user_name: UserName::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            phone_number: PhoneNumber::new("555-7777".to_string()).unwrap(),
            password_hash: "$argon2id$hash".to_string(),
            date_created: Utc::now(),
            roles: Vec::new(),
        }
    }

    #[test]
    fn test_issued_token_round_trips_subject_and_roles() {
        let secret = b"test-secret-key-for-jwt-signing-32b";
        let issuer = JwtTokenIssuer::new(secret, 24, Some("identity-service".to_string()));

        let user = sample_user();
        let roles = vec!["EMPLOYEE".to_string(), "MANAGER".to_string()];
        let result = issuer.generate_token(user.id, &user, &roles);

        assert!(result.is_success);
        let token = result.data.expect("token present");
        assert!(!token.is_empty());

        let handler = JwtHandler::new(secret);
        let claims: IdentityClaims = handler.decode(&token).expect("decode failed");
        assert_eq!(claims.subject_id(), Some(7));
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iss.as_deref(), Some("identity-service"));
        assert!(claims.role_set().contains("MANAGER"));
    }
}
