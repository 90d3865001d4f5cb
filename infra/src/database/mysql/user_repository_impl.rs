//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use jb_core::domain::entities::User;
use jb_core::errors::DomainError;
use jb_core::repositories::UserRepository;

use super::{column_error, is_unique_violation, storage_error};

const USER_COLUMNS: &str =
    "id, email, full_name, hashed_password, is_active, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(column_error("id"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            full_name: row.try_get("full_name").map_err(column_error("full_name"))?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(column_error("hashed_password"))?,
            is_active: row.try_get("is_active").map_err(column_error("is_active"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("failed to load user"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("failed to load user"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                email, full_name, hashed_password, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(&user.hashed_password)
            .bind(user.is_active)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::email_taken()
                } else {
                    storage_error("failed to create user")(e)
                }
            })?;

        user.id = result.last_insert_id() as i64;
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                full_name = ?,
                hashed_password = ?,
                is_active = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.full_name)
            .bind(&user.hashed_password)
            .bind(user.is_active)
            .bind(user.updated_at)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(storage_error("failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }
        Ok(user)
    }
}
