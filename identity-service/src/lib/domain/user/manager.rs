use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::OpResult;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserUpdate;
use crate::domain::user::ports::CredentialHasher;
use crate::domain::user::ports::UserManagerPort;
use crate::domain::user::ports::UserStore;

/// Orchestrates the user lifecycle atop the user store and credential
/// hasher.
///
/// Store and hasher errors are caught here and converted into generic
/// failure envelopes; no collaborator detail crosses this boundary.
pub struct UserManager<US, CH>
where
    US: UserStore,
    CH: CredentialHasher,
{
    store: Arc<US>,
    hasher: Arc<CH>,
}

impl<US, CH> UserManager<US, CH>
where
    US: UserStore,
    CH: CredentialHasher,
{
    /// Create a new user manager with injected dependencies.
    pub fn new(store: Arc<US>, hasher: Arc<CH>) -> Self {
        Self { store, hasher }
    }
}

#[async_trait]
impl<US, CH> UserManagerPort for UserManager<US, CH>
where
    US: UserStore,
    CH: CredentialHasher,
{
    async fn create(&self, new_user: NewUser) -> OpResult<User> {
        let existing = match self.store.find_by_email(new_user.email.as_str()).await {
            Ok(existing) => existing,
            Err(e) => {
                tracing::warn!(error = %e, "User store lookup failed during registration");
                return OpResult::failure("An error occurred while creating the user.");
            }
        };

        if existing.is_some() {
            return OpResult::failure("Email already exists.");
        }

        let password_hash = match self.hasher.hash(new_user.password.as_str()) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!(error = %e, "Password hashing failed during registration");
                return OpResult::failure("An unexpected error occurred while creating the user.");
            }
        };

        match self.store.create_user(&new_user, &password_hash).await {
            Ok(user) => OpResult::success(user),
            Err(e) => {
                tracing::warn!(error = %e, "User store rejected registration");
                OpResult::failure("An error occurred while creating the user.")
            }
        }
    }

    async fn find_by_id(&self, id: UserId) -> OpResult<User> {
        match self.store.find_by_id(id).await {
            Ok(Some(user)) => OpResult::success(user),
            Ok(None) => OpResult::failure("User is not found."),
            Err(e) => {
                tracing::warn!(error = %e, user_id = %id, "User store lookup failed");
                OpResult::failure("An error occurred while finding the user.")
            }
        }
    }

    async fn get_all_users(&self) -> OpResult<Vec<User>> {
        match self.store.list_users().await {
            Ok(users) => OpResult::success(users),
            Err(e) => {
                tracing::warn!(error = %e, "User store listing failed");
                OpResult::failure("An error occurred while finding the users.")
            }
        }
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> OpResult<User> {
        match self
            .store
            .update_user(id, &update.email, &update.phone_number)
            .await
        {
            Ok(Some(user)) => OpResult::success(user),
            Ok(None) => OpResult::failure("User is not found."),
            Err(e) => {
                tracing::warn!(error = %e, user_id = %id, "User store update failed");
                OpResult::failure("Error occurred while updating the user.")
            }
        }
    }

    async fn validate_user(&self, email: &str, password: &str) -> OpResult<User> {
        let user = match self.store.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => return OpResult::failure("User not found"),
            Err(e) => {
                tracing::warn!(error = %e, "User store lookup failed during validation");
                return OpResult::failure("Wrong credentials.");
            }
        };

        match self.hasher.verify(password, &user.password_hash) {
            Ok(true) => OpResult::success(user),
            Ok(false) => OpResult::failure("Wrong credentials"),
            Err(e) => {
                tracing::error!(error = %e, "Credential verification failed");
                OpResult::failure("An unexpected error occurred.")
            }
        }
    }

    async fn reset_password(&self, id: UserId, new_password: &Password) -> OpResult<bool> {
        let password_hash = match self.hasher.hash(new_password.as_str()) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!(error = %e, "Password hashing failed during reset");
                return OpResult::failure("An unexpected error occurred.");
            }
        };

        match self.store.reset_password(id, &password_hash).await {
            Ok(true) => OpResult::success(true),
            Ok(false) => OpResult::failure("User not found."),
            Err(e) => {
                tracing::warn!(error = %e, user_id = %id, "Password reset failed in store");
                OpResult::failure("Error occurred while resetting the password.")
            }
        }
    }

    async fn delete(&self, id: UserId) -> OpResult<bool> {
        match self.store.delete_user(id).await {
            Ok(true) => OpResult::success(true),
            Ok(false) => OpResult::failure("User not found."),
            Err(e) => {
                tracing::warn!(error = %e, user_id = %id, "User store delete failed");
                OpResult::failure("Failed to delete the user.")
            }
        }
    }

    async fn email_in_use(&self, email: &str) -> OpResult<bool> {
        match self.store.find_by_email(email).await {
            Ok(existing) => OpResult::success(existing.is_some()),
            Err(e) => {
                tracing::warn!(error = %e, "User store lookup failed during email check");
                OpResult::failure("Error occurred while email check.")
            }
        }
    }
}
