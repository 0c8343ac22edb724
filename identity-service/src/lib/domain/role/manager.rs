use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::OpResult;
use crate::domain::role::errors::RoleStoreError;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleDescription;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::RoleName;
use crate::domain::role::ports::RoleManagerPort;
use crate::domain::role::ports::RoleStore;
use crate::domain::user::models::UserId;

/// Orchestrates role lifecycle and user-role links atop the role store.
///
/// The two read operations treat an empty result set as a failure; the
/// write operations rely on the store's constraint semantics for
/// uniqueness and link idempotency.
pub struct RoleManager<RS>
where
    RS: RoleStore,
{
    store: Arc<RS>,
}

impl<RS> RoleManager<RS>
where
    RS: RoleStore,
{
    /// Create a new role manager with an injected store.
    pub fn new(store: Arc<RS>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<RS> RoleManagerPort for RoleManager<RS>
where
    RS: RoleStore,
{
    async fn get_all_roles(&self) -> OpResult<Vec<Role>> {
        match self.store.list_roles().await {
            Ok(roles) if roles.is_empty() => OpResult::failure("No roles found."),
            Ok(roles) => OpResult::success(roles),
            Err(e) => {
                tracing::warn!(error = %e, "Role store listing failed");
                OpResult::failure("An error occurred while finding the roles.")
            }
        }
    }

    async fn get_user_roles(&self, user_id: UserId) -> OpResult<Vec<String>> {
        match self.store.user_roles(user_id).await {
            Ok(roles) if roles.is_empty() => {
                OpResult::failure("No roles found for the given user.")
            }
            Ok(roles) => OpResult::success(roles),
            Err(e) => {
                tracing::warn!(error = %e, user_id = %user_id, "Role store lookup failed");
                OpResult::failure("An error occurred while getting user roles.")
            }
        }
    }

    async fn create_role(
        &self,
        name: &RoleName,
        description: &RoleDescription,
    ) -> OpResult<bool> {
        match self.store.create_role(name, description).await {
            Ok(true) => OpResult::success(true),
            Ok(false) => OpResult::failure("Failed to create role."),
            Err(RoleStoreError::DuplicateName(_)) => OpResult::failure("Role already exists."),
            Err(e) => {
                tracing::warn!(error = %e, role_name = %name, "Role store create failed");
                OpResult::failure("Failed to create role.")
            }
        }
    }

    async fn update_role(
        &self,
        id: RoleId,
        name: &RoleName,
        description: &RoleDescription,
    ) -> OpResult<bool> {
        let existing = match self.store.find_by_id(id).await {
            Ok(existing) => existing,
            Err(e) => {
                tracing::warn!(error = %e, role_id = %id, "Role store lookup failed");
                return OpResult::failure("Failed to update role.");
            }
        };

        if existing.is_none() {
            return OpResult::failure("Role is not found.");
        }

        match self.store.update_role(id, name, description).await {
            Ok(true) => OpResult::success(true),
            Ok(false) => OpResult::failure("Failed to update role."),
            Err(RoleStoreError::DuplicateName(_)) => OpResult::failure("Role already exists."),
            Err(e) => {
                tracing::warn!(error = %e, role_id = %id, "Role store update failed");
                OpResult::failure("Failed to update role.")
            }
        }
    }

    async fn delete_role(&self, id: RoleId) -> OpResult<bool> {
        match self.store.delete_role(id).await {
            Ok(true) => OpResult::success(true),
            Ok(false) => OpResult::failure("Role is not found."),
            Err(e) => {
                tracing::warn!(error = %e, role_id = %id, "Role store delete failed");
                OpResult::failure("Failed to delete role.")
            }
        }
    }

    async fn add_to_role(&self, user_id: UserId, role_id: RoleId) -> OpResult<bool> {
        match self.store.add_user_to_role(user_id, role_id).await {
            Ok(true) => OpResult::success(true),
            Ok(false) => OpResult::failure("Failed to add user to the role."),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    user_id = %user_id,
                    role_id = %role_id,
                    "Role store link failed"
                );
                OpResult::failure("Failed to add user to the role.")
            }
        }
    }

    async fn get_role_by_id(&self, id: RoleId) -> OpResult<Role> {
        match self.store.find_by_id(id).await {
            Ok(Some(role)) => OpResult::success(role),
            Ok(None) => OpResult::failure("Role is not found."),
            Err(e) => {
                tracing::warn!(error = %e, role_id = %id, "Role store lookup failed");
                OpResult::failure("An error occurred while retrieving the role.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestRoleStore {}

        #[async_trait]
        impl RoleStore for TestRoleStore {
            async fn list_roles(&self) -> Result<Vec<Role>, RoleStoreError>;
            async fn user_roles(&self, user_id: UserId) -> Result<Vec<String>, RoleStoreError>;
            async fn add_user_to_role(&self, user_id: UserId, role_id: RoleId) -> Result<bool, RoleStoreError>;
            async fn create_role(&self, name: &RoleName, description: &RoleDescription) -> Result<bool, RoleStoreError>;
            async fn update_role(&self, id: RoleId, name: &RoleName, description: &RoleDescription) -> Result<bool, RoleStoreError>;
            async fn delete_role(&self, id: RoleId) -> Result<bool, RoleStoreError>;
            async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleStoreError>;
        }
    }

    fn sample_role(id: i32, name: &str) -> Role {
        Role {
            id: RoleId(id),
            name: RoleName::new(name.to_string()).unwrap(),
            description: RoleDescription::new("Manages things".to_string()).unwrap(),
            date_created: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_all_roles_empty_is_failure() {
        let mut store = MockTestRoleStore::new();
        store.expect_list_roles().times(1).returning(|| Ok(vec![]));

        let manager = RoleManager::new(Arc::new(store));
        let result = manager.get_all_roles().await;

        assert!(!result.is_success);
        assert_eq!(result.error.as_deref(), Some("No roles found."));
    }

    #[tokio::test]
    async fn test_get_user_roles_empty_is_failure() {
        let mut store = MockTestRoleStore::new();
        store.expect_user_roles().times(1).returning(|_| Ok(vec![]));

        let manager = RoleManager::new(Arc::new(store));
        let result = manager.get_user_roles(UserId(1)).await;

        assert!(!result.is_success);
        assert_eq!(
            result.error.as_deref(),
            Some("No roles found for the given user.")
        );
    }

    #[tokio::test]
    async fn test_get_user_roles_returns_names() {
        let mut store = MockTestRoleStore::new();
        store
            .expect_user_roles()
            .with(eq(UserId(1)))
            .times(1)
            .returning(|_| Ok(vec!["EMPLOYEE".to_string(), "MANAGER".to_string()]));

        let manager = RoleManager::new(Arc::new(store));
        let result = manager.get_user_roles(UserId(1)).await;

        assert!(result.is_success);
        assert_eq!(
            result.data,
            Some(vec!["EMPLOYEE".to_string(), "MANAGER".to_string()])
        );
    }

    #[tokio::test]
    async fn test_create_role_duplicate_name_is_conflict() {
        let mut store = MockTestRoleStore::new();
        store
            .expect_create_role()
            .times(1)
            .returning(|name, _| Err(RoleStoreError::DuplicateName(name.as_str().to_string())));

        let manager = RoleManager::new(Arc::new(store));
        let name = RoleName::new("Manager".to_string()).unwrap();
        let description = RoleDescription::new("Oversees a team".to_string()).unwrap();
        let result = manager.create_role(&name, &description).await;

        assert!(!result.is_success);
        assert_eq!(result.error.as_deref(), Some("Role already exists."));
    }

    #[tokio::test]
    async fn test_create_then_duplicate_scenario() {
        let mut store = MockTestRoleStore::new();

        let mut created = false;
        store.expect_create_role().times(2).returning(move |name, _| {
            if created {
                Err(RoleStoreError::DuplicateName(name.as_str().to_string()))
            } else {
                created = true;
                Ok(true)
            }
        });

        let manager = RoleManager::new(Arc::new(store));
        let name = RoleName::new("Manager".to_string()).unwrap();
        let description = RoleDescription::new("Oversees a team".to_string()).unwrap();

        let first = manager.create_role(&name, &description).await;
        assert!(first.is_success);
        assert_eq!(first.data, Some(true));

        let second = manager.create_role(&name, &description).await;
        assert!(!second.is_success);
        assert_eq!(second.error.as_deref(), Some("Role already exists."));
    }

    #[tokio::test]
    async fn test_update_role_unknown_id_checks_before_write() {
        let mut store = MockTestRoleStore::new();
        store.expect_find_by_id().times(1).returning(|_| Ok(None));
        store.expect_update_role().times(0);

        let manager = RoleManager::new(Arc::new(store));
        let name = RoleName::new("Manager".to_string()).unwrap();
        let description = RoleDescription::new("Oversees a team".to_string()).unwrap();
        let result = manager.update_role(RoleId(404), &name, &description).await;

        assert!(!result.is_success);
        assert_eq!(result.error.as_deref(), Some("Role is not found."));
    }

    #[tokio::test]
    async fn test_delete_role_is_not_idempotent() {
        let mut store = MockTestRoleStore::new();

        let mut deleted = false;
        store.expect_delete_role().times(2).returning(move |_| {
            let first = !deleted;
            deleted = true;
            Ok(first)
        });

        let manager = RoleManager::new(Arc::new(store));

        let first = manager.delete_role(RoleId(11)).await;
        assert!(first.is_success);

        let second = manager.delete_role(RoleId(11)).await;
        assert!(!second.is_success);
        assert_eq!(second.error.as_deref(), Some("Role is not found."));
    }

    #[tokio::test]
    async fn test_add_to_role_is_idempotent() {
        let mut store = MockTestRoleStore::new();
        store
            .expect_add_user_to_role()
            .with(eq(UserId(1)), eq(RoleId(11)))
            .times(2)
            .returning(|_, _| Ok(true));

        let manager = RoleManager::new(Arc::new(store));

        let first = manager.add_to_role(UserId(1), RoleId(11)).await;
        let second = manager.add_to_role(UserId(1), RoleId(11)).await;

        assert!(first.is_success);
        assert!(second.is_success);
        assert_eq!(first.data, Some(true));
        assert_eq!(second.data, Some(true));
    }

    #[tokio::test]
    async fn test_get_role_by_id_found() {
        let mut store = MockTestRoleStore::new();
        store
            .expect_find_by_id()
            .with(eq(RoleId(2)))
            .times(1)
            .returning(|_| Ok(Some(sample_role(2, "MANAGER"))));

        let manager = RoleManager::new(Arc::new(store));
        let result = manager.get_role_by_id(RoleId(2)).await;

        assert!(result.is_success);
        assert_eq!(result.data.unwrap().name.as_str(), "MANAGER");
    }
}
