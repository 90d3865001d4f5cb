//! MySQL implementation of the CompanyRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySql, MySqlPool, QueryBuilder, Row};

use jb_core::domain::entities::Company;
use jb_core::errors::DomainError;
use jb_core::repositories::CompanyRepository;

use super::{column_error, is_unique_violation, storage_error};

pub(crate) const COMPANY_COLUMNS: &str = "id, email, company_name, description, website, \
     location, hashed_password, is_active, is_verified, created_at, updated_at";

/// MySQL implementation of CompanyRepository
pub struct MySqlCompanyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCompanyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Company entity
    pub(crate) fn row_to_company(row: &MySqlRow) -> Result<Company, DomainError> {
        Ok(Company {
            id: row.try_get("id").map_err(column_error("id"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            company_name: row
                .try_get("company_name")
                .map_err(column_error("company_name"))?,
            description: row
                .try_get("description")
                .map_err(column_error("description"))?,
            website: row.try_get("website").map_err(column_error("website"))?,
            location: row.try_get("location").map_err(column_error("location"))?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(column_error("hashed_password"))?,
            is_active: row.try_get("is_active").map_err(column_error("is_active"))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(column_error("is_verified"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }

    /// `SELECT` of all companies whose ID is in `ids`, in ID order
    pub(crate) fn select_by_ids(ids: &[i64]) -> QueryBuilder<'_, MySql> {
        let mut builder = QueryBuilder::new(format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id IN ("));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");
        builder
    }
}

#[async_trait]
impl CompanyRepository for MySqlCompanyRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, DomainError> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("failed to load company"))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Company>, DomainError> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE email = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("failed to load company"))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Company>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Self::select_by_ids(ids)
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to load companies"))?;

        rows.iter().map(Self::row_to_company).collect()
    }

    async fn list_all(&self) -> Result<Vec<Company>, DomainError> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to list companies"))?;

        rows.iter().map(Self::row_to_company).collect()
    }

    async fn create(&self, mut company: Company) -> Result<Company, DomainError> {
        let query = r#"
            INSERT INTO companies (
                email, company_name, description, website, location,
                hashed_password, is_active, is_verified, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&company.email)
            .bind(&company.company_name)
            .bind(&company.description)
            .bind(&company.website)
            .bind(&company.location)
            .bind(&company.hashed_password)
            .bind(company.is_active)
            .bind(company.is_verified)
            .bind(company.created_at)
            .bind(company.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::email_taken()
                } else {
                    storage_error("failed to create company")(e)
                }
            })?;

        company.id = result.last_insert_id() as i64;
        Ok(company)
    }

    async fn update(&self, company: Company) -> Result<Company, DomainError> {
        let query = r#"
            UPDATE companies SET
                company_name = ?,
                description = ?,
                website = ?,
                location = ?,
                hashed_password = ?,
                is_active = ?,
                is_verified = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&company.company_name)
            .bind(&company.description)
            .bind(&company.website)
            .bind(&company.location)
            .bind(&company.hashed_password)
            .bind(company.is_active)
            .bind(company.is_verified)
            .bind(company.updated_at)
            .bind(company.id)
            .execute(&self.pool)
            .await
            .map_err(storage_error("failed to update company"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Company"));
        }
        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_ids_binds_each_id() {
        let builder = MySqlCompanyRepository::select_by_ids(&[3, 1, 2]);
        let sql = builder.sql();
        assert!(sql.ends_with("FROM companies WHERE id IN (?, ?, ?) ORDER BY id"));
    }
}
