//! MySQL user DAO implementation.

use crate::{dao::UserDao, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gavel_core::{Email, GavelError, GavelResult, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL-backed [`UserDao`].
#[derive(Clone)]
pub struct MySqlUserDaoImpl {
    pool: Arc<DatabasePool>,
}

impl MySqlUserDaoImpl {
    /// Creates a new MySQL user DAO.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String, // UUID stored as CHAR(36)
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = GavelError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| GavelError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(User {
            id: UserId::from_uuid(id),
            name: row.name,
            email: Email::new_unchecked(row.email),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserDao for MySqlUserDaoImpl {
    async fn find_by_id(&self, id: UserId) -> GavelResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_name_and_email(
        &self,
        name: &str,
        email: &str,
    ) -> GavelResult<Option<User>> {
        debug!("Finding user by name and email: {}", name);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE name = ? AND LOWER(email) = LOWER(?)
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn save(&self, user: &User) -> GavelResult<User> {
        debug!("Saving new user: {}", user.name);

        let id_str = user.id.into_inner().to_string();

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| GavelError::Internal("Failed to fetch inserted user".to_string()))
    }

    async fn update(&self, user: &User) -> GavelResult<User> {
        debug!("Updating user: {}", user.id);

        let id_str = user.id.into_inner().to_string();

        sqlx::query(
            r#"
            UPDATE users
            SET name = ?, email = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(user.updated_at)
        .bind(&id_str)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| GavelError::Internal("Failed to fetch updated user".to_string()))
    }

    async fn delete(&self, id: UserId) -> GavelResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDaoImpl").finish_non_exhaustive()
    }
}
