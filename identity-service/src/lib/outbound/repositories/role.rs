use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::role::errors::RoleStoreError;
use crate::domain::role::models::Role;
use crate::domain::role::models::RoleDescription;
use crate::domain::role::models::RoleId;
use crate::domain::role::models::RoleName;
use crate::domain::role::ports::RoleStore;
use crate::domain::user::models::UserId;

/// Postgres-backed role store.
///
/// Link idempotency comes from `ON CONFLICT DO NOTHING`; orphan cleanup on
/// role deletion comes from the `ON DELETE CASCADE` foreign key on
/// `user_roles`.
pub struct PostgresRoleStore {
    pool: PgPool,
}

impl PostgresRoleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RoleRow {
    id: i32,
    name: String,
    description: String,
    date_created: DateTime<Utc>,
}

impl RoleRow {
    fn into_role(self) -> Result<Role, RoleStoreError> {
        Ok(Role {
            id: RoleId(self.id),
            name: RoleName::new(self.name).map_err(|e| RoleStoreError::Database(e.to_string()))?,
            description: RoleDescription::new(self.description)
                .map_err(|e| RoleStoreError::Database(e.to_string()))?,
            date_created: self.date_created,
        })
    }
}

fn map_role_write_error(e: sqlx::Error, name: &RoleName) -> RoleStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RoleStoreError::DuplicateName(name.as_str().to_string());
        }
    }
    RoleStoreError::Database(e.to_string())
}

#[async_trait]
impl RoleStore for PostgresRoleStore {
    async fn list_roles(&self) -> Result<Vec<Role>, RoleStoreError> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description, date_created
            FROM roles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RoleStoreError::Database(e.to_string()))?;

        rows.into_iter().map(RoleRow::into_role).collect()
    }

    async fn user_roles(&self, user_id: UserId) -> Result<Vec<String>, RoleStoreError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RoleStoreError::Database(e.to_string()))
    }

    async fn add_user_to_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<bool, RoleStoreError> {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, role_id) DO NOTHING
            "#,
        )
        .bind(user_id.0)
        .bind(role_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return RoleStoreError::UnknownUserOrRole;
                }
            }
            RoleStoreError::Database(e.to_string())
        })?;

        // Zero affected rows means the link already existed; that still
        // counts as linked.
        Ok(true)
    }

    async fn create_role(
        &self,
        name: &RoleName,
        description: &RoleDescription,
    ) -> Result<bool, RoleStoreError> {
        let result = sqlx::query("INSERT INTO roles (name, description) VALUES ($1, $2)")
            .bind(name.as_str())
            .bind(description.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_role_write_error(e, name))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_role(
        &self,
        id: RoleId,
        name: &RoleName,
        description: &RoleDescription,
    ) -> Result<bool, RoleStoreError> {
        let result = sqlx::query("UPDATE roles SET name = $2, description = $3 WHERE id = $1")
            .bind(id.0)
            .bind(name.as_str())
            .bind(description.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_role_write_error(e, name))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_role(&self, id: RoleId) -> Result<bool, RoleStoreError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| RoleStoreError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleStoreError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description, date_created
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RoleStoreError::Database(e.to_string()))?;

        row.map(RoleRow::into_role).transpose()
    }
}
