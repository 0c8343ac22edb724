use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::domain::result::OpResult;
use crate::domain::role::ports::RoleManagerPort;
use crate::domain::signin::models::AuthenticatedSession;
use crate::domain::signin::models::Credentials;
use crate::domain::signin::models::SessionUser;
use crate::domain::signin::ports::TokenIssuer;
use crate::domain::user::ports::UserManagerPort;

/// Sign-in was aborted by cooperative cancellation before any collaborator
/// was called. Distinct from a business failure; the transport layer turns
/// it into a request-aborted response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Sign-in aborted by cancellation")]
pub struct SignInCancelled;

/// Composes credential validation, role loading, and token issuance into
/// one outward-facing operation.
///
/// Credential failures of every kind collapse to one uniform message so
/// the response cannot be used to enumerate accounts. Role-loading
/// failures propagate verbatim: at that point the caller has already
/// proven the identity.
pub struct SignInPipeline<UM, RM, TI>
where
    UM: UserManagerPort,
    RM: RoleManagerPort,
    TI: TokenIssuer,
{
    user_manager: Arc<UM>,
    role_manager: Arc<RM>,
    token_issuer: Arc<TI>,
}

impl<UM, RM, TI> SignInPipeline<UM, RM, TI>
where
    UM: UserManagerPort,
    RM: RoleManagerPort,
    TI: TokenIssuer,
{
    /// Create a new pipeline with injected collaborators.
    pub fn new(user_manager: Arc<UM>, role_manager: Arc<RM>, token_issuer: Arc<TI>) -> Self {
        Self {
            user_manager,
            role_manager,
            token_issuer,
        }
    }

    /// Run the sign-in state machine.
    ///
    /// Roles are loaded only after credentials validate; the token is
    /// issued only after roles load. A roles result that is successful but
    /// carries no data proceeds with an empty role list.
    ///
    /// # Errors
    /// * `SignInCancelled` - The token was already cancelled at entry
    pub async fn sign_in(
        &self,
        credentials: &Credentials,
        cancellation: &CancellationToken,
    ) -> Result<OpResult<AuthenticatedSession>, SignInCancelled> {
        if cancellation.is_cancelled() {
            return Err(SignInCancelled);
        }

        let validated = self
            .user_manager
            .validate_user(&credentials.email, &credentials.password)
            .await;

        if !validated.is_success {
            return Ok(OpResult::failure("Invalid credentials"));
        }

        let Some(user) = validated.data else {
            // Success without a payload has no legitimate producer.
            return Ok(OpResult::failure("Unexpected error"));
        };

        let roles = self.role_manager.get_user_roles(user.id).await;
        if !roles.is_success {
            return Ok(roles.propagate());
        }
        let role_list = roles.data.unwrap_or_default();

        let issued = self.token_issuer.generate_token(user.id, &user, &role_list);
        let token = match issued {
            OpResult {
                is_success: true,
                data: Some(token),
                ..
            } if !token.is_empty() => token,
            _ => return Ok(OpResult::failure("Token generation failed")),
        };

        let session = AuthenticatedSession {
            token,
            user: SessionUser::from_user(&user, role_list),
        };

        Ok(OpResult::success(session))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::role::models::Role;
    use crate::domain::role::models::RoleDescription;
    use crate::domain::role::models::RoleId;
    use crate::domain::role::models::RoleName;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::Password;
    use crate::domain::user::models::PhoneNumber;
    use crate::domain::user::models::User;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::UserName;
    use crate::domain::user::models::UserUpdate;

    mock! {
        pub TestUserManager {}

        #[async_trait]
        impl UserManagerPort for TestUserManager {
            async fn create(&self, new_user: NewUser) -> OpResult<User>;
            async fn find_by_id(&self, id: UserId) -> OpResult<User>;
            async fn get_all_users(&self) -> OpResult<Vec<User>>;
            async fn update(&self, id: UserId, update: UserUpdate) -> OpResult<User>;
            async fn validate_user(&self, email: &str, password: &str) -> OpResult<User>;
            async fn reset_password(&self, id: UserId, new_password: &Password) -> OpResult<bool>;
            async fn delete(&self, id: UserId) -> OpResult<bool>;
            async fn email_in_use(&self, email: &str) -> OpResult<bool>;
        }
    }

    mock! {
        pub TestRoleManager {}

        #[async_trait]
        impl RoleManagerPort for TestRoleManager {
            async fn get_all_roles(&self) -> OpResult<Vec<Role>>;
            async fn get_user_roles(&self, user_id: UserId) -> OpResult<Vec<String>>;
            async fn create_role(&self, name: &RoleName, description: &RoleDescription) -> OpResult<bool>;
            async fn update_role(&self, id: RoleId, name: &RoleName, description: &RoleDescription) -> OpResult<bool>;
            async fn delete_role(&self, id: RoleId) -> OpResult<bool>;
            async fn add_to_role(&self, user_id: UserId, role_id: RoleId) -> OpResult<bool>;
            async fn get_role_by_id(&self, id: RoleId) -> OpResult<Role>;
        }
    }

    mock! {
        pub TestTokenIssuer {}

        impl TokenIssuer for TestTokenIssuer {
            fn generate_token(&self, subject: UserId, user: &User, roles: &[String]) -> OpResult<String>;
        }
    }

    fn sample_user(id: i32) -> User {
        User {
            id: UserId(id),
            user_name: UserName::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            phone_number: PhoneNumber::new("1234567890".to_string()).unwrap(),
            password_hash: "$argon2id$stored_hash".to_string(),
            date_created: Utc::now(),
            roles: Vec::new(),
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_sign_in_issues_token() {
        let mut users = MockTestUserManager::new();
        let mut roles = MockTestRoleManager::new();
        let mut issuer = MockTestTokenIssuer::new();

        users
            .expect_validate_user()
            .with(eq("test@example.com"), eq("password123"))
            .times(1)
            .returning(|_, _| OpResult::success(sample_user(1)));

        roles
            .expect_get_user_roles()
            .with(eq(UserId(1)))
            .times(1)
            .returning(|_| {
                OpResult::success(vec!["HR ADMIN".to_string(), "EMPLOYEE".to_string()])
            });

        issuer
            .expect_generate_token()
            .withf(|subject, _, roles| *subject == UserId(1) && roles.len() == 2)
            .times(1)
            .returning(|_, _, _| OpResult::success("valid_token".to_string()));

        let pipeline = SignInPipeline::new(Arc::new(users), Arc::new(roles), Arc::new(issuer));
        let result = pipeline
            .sign_in(&credentials(), &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(result.is_success);
        let session = result.data.unwrap();
        assert_eq!(session.token, "valid_token");
        assert_eq!(session.user.id, 1);
        assert_eq!(session.user.roles.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_collapse_to_same_message() {
        for failure in ["User not found", "Wrong credentials"] {
            let mut users = MockTestUserManager::new();
            let mut roles = MockTestRoleManager::new();
            let mut issuer = MockTestTokenIssuer::new();

            users
                .expect_validate_user()
                .times(1)
                .returning(move |_, _| OpResult::failure(failure));
            roles.expect_get_user_roles().times(0);
            issuer.expect_generate_token().times(0);

            let pipeline = SignInPipeline::new(Arc::new(users), Arc::new(roles), Arc::new(issuer));
            let result = pipeline
                .sign_in(&credentials(), &CancellationToken::new())
                .await
                .expect("not cancelled");

            assert!(!result.is_success);
            assert_eq!(result.error.as_deref(), Some("Invalid credentials"));
        }
    }

    #[tokio::test]
    async fn test_role_failure_propagates_verbatim() {
        let mut users = MockTestUserManager::new();
        let mut roles = MockTestRoleManager::new();
        let mut issuer = MockTestTokenIssuer::new();

        users
            .expect_validate_user()
            .times(1)
            .returning(|_, _| OpResult::success(sample_user(1)));
        roles
            .expect_get_user_roles()
            .times(1)
            .returning(|_| OpResult::failure("No roles found for the given user."));
        issuer.expect_generate_token().times(0);

        let pipeline = SignInPipeline::new(Arc::new(users), Arc::new(roles), Arc::new(issuer));
        let result = pipeline
            .sign_in(&credentials(), &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(!result.is_success);
        assert_eq!(
            result.error.as_deref(),
            Some("No roles found for the given user.")
        );
    }

    #[tokio::test]
    async fn test_roles_success_without_data_signs_in_with_empty_list() {
        let mut users = MockTestUserManager::new();
        let mut roles = MockTestRoleManager::new();
        let mut issuer = MockTestTokenIssuer::new();

        users
            .expect_validate_user()
            .times(1)
            .returning(|_, _| OpResult::success(sample_user(1)));
        roles.expect_get_user_roles().times(1).returning(|_| OpResult {
            is_success: true,
            data: None,
            error: None,
        });
        issuer
            .expect_generate_token()
            .withf(|_, _, roles| roles.is_empty())
            .times(1)
            .returning(|_, _, _| OpResult::success("valid_token".to_string()));

        let pipeline = SignInPipeline::new(Arc::new(users), Arc::new(roles), Arc::new(issuer));
        let result = pipeline
            .sign_in(&credentials(), &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(result.is_success);
        assert!(result.data.unwrap().user.roles.is_empty());
    }

    #[tokio::test]
    async fn test_token_failure_is_normalized() {
        for broken in [
            OpResult::failure("encoder exploded"),
            OpResult {
                is_success: true,
                data: None,
                error: None,
            },
            OpResult::success(String::new()),
        ] {
            let mut users = MockTestUserManager::new();
            let mut roles = MockTestRoleManager::new();
            let mut issuer = MockTestTokenIssuer::new();

            users
                .expect_validate_user()
                .times(1)
                .returning(|_, _| OpResult::success(sample_user(1)));
            roles
                .expect_get_user_roles()
                .times(1)
                .returning(|_| OpResult::success(vec!["EMPLOYEE".to_string()]));
            let broken_clone = broken.clone();
            issuer
                .expect_generate_token()
                .times(1)
                .returning(move |_, _, _| broken_clone.clone());

            let pipeline = SignInPipeline::new(Arc::new(users), Arc::new(roles), Arc::new(issuer));
            let result = pipeline
                .sign_in(&credentials(), &CancellationToken::new())
                .await
                .expect("not cancelled");

            assert!(!result.is_success);
            assert_eq!(result.error.as_deref(), Some("Token generation failed"));
        }
    }

    #[tokio::test]
    async fn test_validation_success_without_user_is_unexpected_error() {
        let mut users = MockTestUserManager::new();
        let mut roles = MockTestRoleManager::new();
        let issuer = MockTestTokenIssuer::new();

        users.expect_validate_user().times(1).returning(|_, _| OpResult {
            is_success: true,
            data: None,
            error: None,
        });
        roles.expect_get_user_roles().times(0);

        let pipeline = SignInPipeline::new(Arc::new(users), Arc::new(roles), Arc::new(issuer));
        let result = pipeline
            .sign_in(&credentials(), &CancellationToken::new())
            .await
            .expect("not cancelled");

        assert!(!result.is_success);
        assert_eq!(result.error.as_deref(), Some("Unexpected error"));
    }

    #[tokio::test]
    async fn test_cancelled_token_aborts_before_any_collaborator() {
        let mut users = MockTestUserManager::new();
        let mut roles = MockTestRoleManager::new();
        let mut issuer = MockTestTokenIssuer::new();

        users.expect_validate_user().times(0);
        roles.expect_get_user_roles().times(0);
        issuer.expect_generate_token().times(0);

        let cancellation = CancellationToken::new();
        cancellation.cancel();

        let pipeline = SignInPipeline::new(Arc::new(users), Arc::new(roles), Arc::new(issuer));
        let result = pipeline.sign_in(&credentials(), &cancellation).await;

        assert_eq!(result, Err(SignInCancelled));
    }
}
