use async_trait::async_trait;

use crate::domain::result::OpResult;
use crate::domain::user::errors::CredentialError;
use crate::domain::user::errors::UserStoreError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserUpdate;

/// Durable storage for user records.
///
/// Implementations never return partially-written records; any underlying
/// failure surfaces as a `UserStoreError`.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user with an already-hashed password.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Another user holds this email (case-insensitive)
    /// * `Database` - Underlying operation failed
    async fn create_user(&self, user: &NewUser, password_hash: &str)
        -> Result<User, UserStoreError>;

    /// Retrieve a user by identifier. None if absent.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Retrieve a user by email, compared case-insensitively. None if absent.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;

    /// Overwrite the mutable fields of an existing user.
    ///
    /// # Returns
    /// The updated record, or None when the id is unknown
    async fn update_user(
        &self,
        id: UserId,
        email: &EmailAddress,
        phone_number: &PhoneNumber,
    ) -> Result<Option<User>, UserStoreError>;

    /// Remove a user. The affected-row count is the success signal.
    async fn delete_user(&self, id: UserId) -> Result<bool, UserStoreError>;

    /// Replace a user's password hash. False when the id is unknown.
    async fn reset_password(&self, id: UserId, password_hash: &str)
        -> Result<bool, UserStoreError>;

    /// Retrieve all users, each joined with its role names.
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;
}

/// One-way hashing and verification of credentials.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext credential for storage.
    fn hash(&self, plain: &str) -> Result<String, CredentialError>;

    /// Verify a plaintext credential against a stored hash.
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, CredentialError>;
}

/// Port for user lifecycle operations.
///
/// Every operation returns the uniform result envelope; expected failures
/// are never expressed as errors.
#[async_trait]
pub trait UserManagerPort: Send + Sync + 'static {
    /// Register a new user after checking email uniqueness.
    async fn create(&self, new_user: NewUser) -> OpResult<User>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: UserId) -> OpResult<User>;

    /// List all users with their role names attached.
    async fn get_all_users(&self) -> OpResult<Vec<User>>;

    /// Overwrite a user's email and phone number.
    async fn update(&self, id: UserId, update: UserUpdate) -> OpResult<User>;

    /// Check a credential pair against the stored hash.
    ///
    /// The failure messages deliberately do not reach sign-in callers
    /// unmodified; the pipeline collapses them to one uniform message.
    async fn validate_user(&self, email: &str, password: &str) -> OpResult<User>;

    /// Re-hash and persist a new password.
    async fn reset_password(&self, id: UserId, new_password: &Password) -> OpResult<bool>;

    /// Delete a user; absence of an affected row is a failure.
    async fn delete(&self, id: UserId) -> OpResult<bool>;

    /// Report whether an email is already registered.
    async fn email_in_use(&self, email: &str) -> OpResult<bool>;
}
