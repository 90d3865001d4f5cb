//! MySQL implementation of the JobRepository trait.
//!
//! Jobs are read in one statement and their tags and companies are loaded
//! in two batched follow-up statements. Writes touching `job_tags` run in a
//! transaction that rolls back when dropped uncommitted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::str::FromStr;

use sqlx::{mysql::MySqlRow, MySql, MySqlConnection, MySqlPool, QueryBuilder, Row};

use jb_core::domain::entities::{Company, Job, JobDetails, JobLevel, JobType, Tag};
use jb_core::domain::value_objects::JobFilter;
use jb_core::errors::DomainError;
use jb_core::repositories::JobRepository;
use jb_shared::Pagination;

use super::company_repository_impl::MySqlCompanyRepository;
use super::tag_repository_impl::MySqlTagRepository;
use super::{column_error, storage_error};

const JOB_COLUMNS: &str = "j.id, j.title, j.description, j.location, j.job_type, j.job_level, \
     j.salary_min, j.salary_max, j.is_active, j.company_id, j.created_at, j.updated_at";

/// Build the search statement for a job filter
///
/// Tag criteria use an `EXISTS` sub-select so a job matching several of the
/// wanted tags is returned once and the `LIMIT` stays exact.
pub fn build_job_filter_query(filter: &JobFilter) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs j WHERE j.is_active = "));
    builder.push_bind(filter.is_active);

    let tags = filter.normalized_tags();
    if !tags.is_empty() {
        builder.push(
            " AND EXISTS (SELECT 1 FROM job_tags jt JOIN tags t ON t.id = jt.tag_id \
             WHERE jt.job_id = j.id AND t.name IN (",
        );
        let mut separated = builder.separated(", ");
        for tag in tags {
            separated.push_bind(tag);
        }
        separated.push_unseparated("))");
    }

    if let Some(pattern) = filter.location_pattern() {
        builder.push(" AND LOWER(j.location) LIKE LOWER(");
        builder.push_bind(pattern);
        builder.push(")");
    }

    if let Some(job_type) = filter.job_type {
        builder.push(" AND j.job_type = ");
        builder.push_bind(job_type.as_str());
    }

    if let Some(job_level) = filter.job_level {
        builder.push(" AND j.job_level = ");
        builder.push_bind(job_level.as_str());
    }

    push_newest_first_page(&mut builder, filter.page);
    builder
}

fn push_newest_first_page(builder: &mut QueryBuilder<'static, MySql>, page: Pagination) {
    builder.push(" ORDER BY j.created_at DESC, j.id DESC LIMIT ");
    builder.push_bind(page.limit_i64());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset_i64());
}

/// MySQL implementation of JobRepository
pub struct MySqlJobRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlJobRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Job entity
    fn row_to_job(row: &MySqlRow) -> Result<Job, DomainError> {
        let job_type: String = row.try_get("job_type").map_err(column_error("job_type"))?;
        let job_level: String = row.try_get("job_level").map_err(column_error("job_level"))?;

        Ok(Job {
            id: row.try_get("id").map_err(column_error("id"))?,
            title: row.try_get("title").map_err(column_error("title"))?,
            description: row
                .try_get("description")
                .map_err(column_error("description"))?,
            location: row.try_get("location").map_err(column_error("location"))?,
            job_type: JobType::from_str(&job_type).map_err(DomainError::internal)?,
            job_level: JobLevel::from_str(&job_level).map_err(DomainError::internal)?,
            salary_min: row.try_get("salary_min").map_err(column_error("salary_min"))?,
            salary_max: row.try_get("salary_max").map_err(column_error("salary_max"))?,
            is_active: row.try_get("is_active").map_err(column_error("is_active"))?,
            company_id: row.try_get("company_id").map_err(column_error("company_id"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }

    /// Tags of every listed job, grouped by job ID
    async fn load_tags(&self, job_ids: &[i64]) -> Result<HashMap<i64, Vec<Tag>>, DomainError> {
        let mut grouped: HashMap<i64, Vec<Tag>> = HashMap::new();
        if job_ids.is_empty() {
            return Ok(grouped);
        }

        let mut builder = QueryBuilder::<MySql>::new(
            "SELECT jt.job_id, t.id, t.name, t.created_at, t.updated_at \
             FROM job_tags jt JOIN tags t ON t.id = jt.tag_id WHERE jt.job_id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in job_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY t.name");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to load job tags"))?;

        for row in &rows {
            let job_id: i64 = row.try_get("job_id").map_err(column_error("job_id"))?;
            grouped
                .entry(job_id)
                .or_default()
                .push(MySqlTagRepository::row_to_tag(row)?);
        }
        Ok(grouped)
    }

    /// Owning companies of the listed jobs, keyed by company ID
    async fn load_companies(&self, jobs: &[Job]) -> Result<HashMap<i64, Company>, DomainError> {
        let mut ids: Vec<i64> = jobs.iter().map(|j| j.company_id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = MySqlCompanyRepository::select_by_ids(&ids)
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to load job companies"))?;

        rows.iter()
            .map(|row| MySqlCompanyRepository::row_to_company(row).map(|c| (c.id, c)))
            .collect()
    }

    /// Attach tags and company to each job, keeping the input order
    async fn load_details(&self, jobs: Vec<Job>) -> Result<Vec<JobDetails>, DomainError> {
        let job_ids: Vec<i64> = jobs.iter().map(|j| j.id).collect();
        let mut tags = self.load_tags(&job_ids).await?;
        let companies = self.load_companies(&jobs).await?;

        jobs.into_iter()
            .map(|job| {
                let company = companies
                    .get(&job.company_id)
                    .cloned()
                    .ok_or_else(|| DomainError::internal("job references a missing company"))?;
                let tags = tags.remove(&job.id).unwrap_or_default();
                Ok(JobDetails::new(job, tags, company))
            })
            .collect()
    }

    async fn insert_job_tags(
        conn: &mut MySqlConnection,
        job_id: i64,
        tag_ids: &[i64],
    ) -> Result<(), DomainError> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<MySql>::new("INSERT INTO job_tags (job_id, tag_id) ");
        builder.push_values(tag_ids, |mut b, tag_id| {
            b.push_bind(job_id).push_bind(*tag_id);
        });

        builder
            .build()
            .execute(&mut *conn)
            .await
            .map_err(storage_error("failed to link job tags"))?;
        Ok(())
    }
}

#[async_trait]
impl JobRepository for MySqlJobRepository {
    async fn create(&self, mut job: Job, tag_ids: &[i64]) -> Result<Job, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("failed to begin transaction"))?;

        let query = r#"
            INSERT INTO jobs (
                title, description, location, job_type, job_level,
                salary_min, salary_max, is_active, company_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.location)
            .bind(job.job_type.as_str())
            .bind(job.job_level.as_str())
            .bind(job.salary_min)
            .bind(job.salary_max)
            .bind(job.is_active)
            .bind(job.company_id)
            .bind(job.created_at)
            .bind(job.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(storage_error("failed to create job"))?;

        job.id = result.last_insert_id() as i64;
        Self::insert_job_tags(&mut tx, job.id, tag_ids).await?;

        tx.commit()
            .await
            .map_err(storage_error("failed to commit job"))?;
        Ok(job)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobDetails>, DomainError> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs j WHERE j.id = ? LIMIT 1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("failed to load job"))?;

        match row {
            Some(row) => {
                let job = Self::row_to_job(&row)?;
                Ok(self.load_details(vec![job]).await?.pop())
            }
            None => Ok(None),
        }
    }

    async fn update(&self, job: Job, tag_ids: Option<&[i64]>) -> Result<Job, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("failed to begin transaction"))?;

        let query = r#"
            UPDATE jobs SET
                title = ?,
                description = ?,
                location = ?,
                job_type = ?,
                job_level = ?,
                salary_min = ?,
                salary_max = ?,
                is_active = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.location)
            .bind(job.job_type.as_str())
            .bind(job.job_level.as_str())
            .bind(job.salary_min)
            .bind(job.salary_max)
            .bind(job.is_active)
            .bind(job.updated_at)
            .bind(job.id)
            .execute(&mut *tx)
            .await
            .map_err(storage_error("failed to update job"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Job"));
        }

        if let Some(tag_ids) = tag_ids {
            sqlx::query("DELETE FROM job_tags WHERE job_id = ?")
                .bind(job.id)
                .execute(&mut *tx)
                .await
                .map_err(storage_error("failed to unlink job tags"))?;
            Self::insert_job_tags(&mut tx, job.id, tag_ids).await?;
        }

        tx.commit()
            .await
            .map_err(storage_error("failed to commit job"))?;
        Ok(job)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("failed to begin transaction"))?;

        sqlx::query("DELETE FROM job_tags WHERE job_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(storage_error("failed to unlink job tags"))?;

        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(storage_error("failed to delete job"))?;

        tx.commit()
            .await
            .map_err(storage_error("failed to commit job deletion"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, filter: &JobFilter) -> Result<Vec<JobDetails>, DomainError> {
        let rows = build_job_filter_query(filter)
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to search jobs"))?;

        let jobs = rows.iter().map(Self::row_to_job).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = jobs.len(), "Job search completed");
        self.load_details(jobs).await
    }

    async fn find_by_company(
        &self,
        company_id: i64,
        page: Pagination,
    ) -> Result<Vec<JobDetails>, DomainError> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs j WHERE j.company_id = "));
        builder.push_bind(company_id);
        push_newest_first_page(&mut builder, page);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to load company jobs"))?;

        let jobs = rows.iter().map(Self::row_to_job).collect::<Result<Vec<_>, _>>()?;
        self.load_details(jobs).await
    }

    async fn find_by_company_ids(
        &self,
        company_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Job>>, DomainError> {
        let mut grouped: HashMap<i64, Vec<Job>> = HashMap::new();
        if company_ids.is_empty() {
            return Ok(grouped);
        }

        let mut builder =
            QueryBuilder::<MySql>::new(format!("SELECT {JOB_COLUMNS} FROM jobs j WHERE j.company_id IN ("));
        let mut separated = builder.separated(", ");
        for id in company_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY j.id");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("failed to load company jobs"))?;

        for row in &rows {
            let job = Self::row_to_job(row)?;
            grouped.entry(job.company_id).or_default().push(job);
        }
        Ok(grouped)
    }
}
