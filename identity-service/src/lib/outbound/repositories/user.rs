use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::user::errors::UserStoreError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserStore;

/// Postgres-backed user store.
///
/// Email uniqueness is enforced case-insensitively by the
/// `users_email_lower_key` index; affected-row counts signal delete and
/// reset outcomes.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    user_name: String,
    email: String,
    phone_number: String,
    password_hash: String,
    date_created: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        Ok(User {
            id: UserId(self.id),
            user_name: UserName::new(self.user_name)
                .map_err(|e| UserStoreError::Database(e.to_string()))?,
            email: EmailAddress::new(self.email)
                .map_err(|e| UserStoreError::Database(e.to_string()))?,
            phone_number: PhoneNumber::new(self.phone_number)
                .map_err(|e| UserStoreError::Database(e.to_string()))?,
            password_hash: self.password_hash,
            date_created: self.date_created,
            roles: Vec::new(),
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserWithRoleRow {
    id: i32,
    user_name: String,
    email: String,
    phone_number: String,
    password_hash: String,
    date_created: DateTime<Utc>,
    role_name: Option<String>,
}

fn map_unique_email(e: sqlx::Error, email: &str) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return UserStoreError::DuplicateEmail(email.to_string());
        }
    }
    UserStoreError::Database(e.to_string())
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create_user(
        &self,
        user: &NewUser,
        password_hash: &str,
    ) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_name, email, phone_number, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_name, email, phone_number, password_hash, date_created
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.phone_number.as_str())
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_email(e, user.email.as_str()))?;

        row.into_user()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, email, phone_number, password_hash, date_created
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, email, phone_number, password_hash, date_created
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update_user(
        &self,
        id: UserId,
        email: &EmailAddress,
        phone_number: &PhoneNumber,
    ) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET email = $2, phone_number = $3
            WHERE id = $1
            RETURNING id, user_name, email, phone_number, password_hash, date_created
            "#,
        )
        .bind(id.0)
        .bind(email.as_str())
        .bind(phone_number.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_email(e, email.as_str()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, UserStoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| UserStoreError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn reset_password(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<bool, UserStoreError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id.0)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| UserStoreError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = sqlx::query_as::<_, UserWithRoleRow>(
            r#"
            SELECT u.id, u.user_name, u.email, u.phone_number, u.password_hash,
                   u.date_created, r.name AS role_name
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            ORDER BY u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserStoreError::Database(e.to_string()))?;

        // Fold the join back into one user per id, in query order.
        let mut users: Vec<User> = Vec::new();
        let mut index_by_id: HashMap<i32, usize> = HashMap::new();

        for row in rows {
            let position = match index_by_id.get(&row.id) {
                Some(position) => *position,
                None => {
                    let user = UserRow {
                        id: row.id,
                        user_name: row.user_name.clone(),
                        email: row.email.clone(),
                        phone_number: row.phone_number.clone(),
                        password_hash: row.password_hash.clone(),
                        date_created: row.date_created,
                    }
                    .into_user()?;
                    index_by_id.insert(row.id, users.len());
                    users.push(user);
                    users.len() - 1
                }
            };

            if let Some(role_name) = row.role_name {
                users[position].roles.push(role_name);
            }
        }

        Ok(users)
    }
}
