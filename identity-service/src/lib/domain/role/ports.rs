use async_trait::async_trait;

use crate::domain::result::OpResult;
use crate::domain::role::errors::RoleStoreError;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleDescription;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::RoleName;
use crate::domain::user::models::UserId;

/// Durable storage for roles and user-role links.
#[async_trait]
pub trait RoleStore: Send + Sync + 'static {
    /// Retrieve all roles.
    async fn list_roles(&self) -> Result<Vec<Role>, RoleStoreError>;

    /// Retrieve the role names linked to a user. Empty when none.
    async fn user_roles(&self, user_id: UserId) -> Result<Vec<String>, RoleStoreError>;

    /// Link a user to a role. Linking an already-linked pair succeeds
    /// without creating a duplicate.
    ///
    /// # Errors
    /// * `UnknownUserOrRole` - Either side of the link does not exist
    /// * `Database` - Underlying operation failed
    async fn add_user_to_role(&self, user_id: UserId, role_id: RoleId)
        -> Result<bool, RoleStoreError>;

    /// Persist a new role.
    ///
    /// # Errors
    /// * `DuplicateName` - Another role holds this name
    async fn create_role(
        &self,
        name: &RoleName,
        description: &RoleDescription,
    ) -> Result<bool, RoleStoreError>;

    /// Overwrite an existing role. False when the id is unknown.
    async fn update_role(
        &self,
        id: RoleId,
        name: &RoleName,
        description: &RoleDescription,
    ) -> Result<bool, RoleStoreError>;

    /// Remove a role, detaching it from all linked users. False when the
    /// id is unknown.
    async fn delete_role(&self, id: RoleId) -> Result<bool, RoleStoreError>;

    /// Retrieve a role by identifier. None if absent.
    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleStoreError>;
}

/// Port for role lifecycle and user-role link operations.
#[async_trait]
pub trait RoleManagerPort: Send + Sync + 'static {
    /// List all roles. An empty set is a failure for this read.
    async fn get_all_roles(&self) -> OpResult<Vec<Role>>;

    /// List the role names held by a user. An empty set is a failure for
    /// this read; sign-in tolerates the condition on its own terms.
    async fn get_user_roles(&self, user_id: UserId) -> OpResult<Vec<String>>;

    /// Create a role. Name/description length constraints are enforced
    /// upstream, not here.
    async fn create_role(&self, name: &RoleName, description: &RoleDescription)
        -> OpResult<bool>;

    /// Update a role, failing when the id is unknown.
    async fn update_role(
        &self,
        id: RoleId,
        name: &RoleName,
        description: &RoleDescription,
    ) -> OpResult<bool>;

    /// Delete a role. Repeating the call for the same id fails.
    async fn delete_role(&self, id: RoleId) -> OpResult<bool>;

    /// Link a user to a role. Safe to repeat.
    async fn add_to_role(&self, user_id: UserId, role_id: RoleId) -> OpResult<bool>;

    /// Look up a role by id.
    async fn get_role_by_id(&self, id: RoleId) -> OpResult<Role>;
}
