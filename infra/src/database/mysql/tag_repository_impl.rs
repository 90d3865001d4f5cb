//! MySQL implementation of the TagRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use jb_core::domain::entities::Tag;
use jb_core::errors::DomainError;
use jb_core::repositories::TagRepository;

use super::{column_error, is_unique_violation, storage_error};

/// MySQL implementation of TagRepository
///
/// `tags.name` carries a unique index; an insert that loses a race against a
/// concurrent request reports `DomainError::Conflict`.
pub struct MySqlTagRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTagRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Tag entity
    pub(crate) fn row_to_tag(row: &MySqlRow) -> Result<Tag, DomainError> {
        Ok(Tag {
            id: row.try_get("id").map_err(column_error("id"))?,
            name: row.try_get("name").map_err(column_error("name"))?,
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
impl TagRepository for MySqlTagRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DomainError> {
        let query = r#"
            SELECT id, name, created_at, updated_at
            FROM tags
            WHERE name = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("failed to load tag"))?;

        row.as_ref().map(Self::row_to_tag).transpose()
    }

    async fn create(&self, mut tag: Tag) -> Result<Tag, DomainError> {
        let query = "INSERT INTO tags (name, created_at, updated_at) VALUES (?, ?, ?)";

        let result = sqlx::query(query)
            .bind(&tag.name)
            .bind(tag.created_at)
            .bind(tag.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict {
                        message: format!("Tag '{}' already exists", tag.name),
                    }
                } else {
                    storage_error("failed to create tag")(e)
                }
            })?;

        tag.id = result.last_insert_id() as i64;
        Ok(tag)
    }

    async fn list_all(&self) -> Result<Vec<Tag>, DomainError> {
        let rows = sqlx::query("SELECT id, name, created_at, updated_at FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to list tags"))?;

        rows.iter().map(Self::row_to_tag).collect()
    }
}
