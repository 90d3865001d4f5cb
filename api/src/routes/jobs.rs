//! Job posting and search endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use jb_core::JobFilter;

use crate::app::AppState;
use crate::dto::{CreateJobRequest, JobQuery, JobResponse, MyJobsQuery, UpdateJobRequest};
use crate::handlers::ApiResult;
use crate::middleware::CurrentCompany;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // `/company/my-jobs` must be registered before `/{id}`
    cfg.route("", web::get().to(search))
        .route("/", web::get().to(search))
        .route("", web::post().to(create))
        .route("/", web::post().to(create))
        .route("/company/my-jobs", web::get().to(my_jobs))
        .route("/{id}", web::get().to(get))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

fn to_responses(jobs: Vec<jb_core::JobDetails>) -> Vec<JobResponse> {
    jobs.into_iter().map(JobResponse::from).collect()
}

/// GET /jobs/
///
/// Public search; see [`JobQuery`] for the accepted parameters.
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<JobQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    query.validate()?;

    let filter = JobFilter::from(query);
    let jobs = state.jobs.search(&filter).await?;
    tracing::debug!(count = jobs.len(), "Job search");
    Ok(HttpResponse::Ok().json(to_responses(jobs)))
}

/// POST /jobs/
pub async fn create(
    state: web::Data<AppState>,
    CurrentCompany(company): CurrentCompany,
    body: web::Json<CreateJobRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let job = state.jobs.create(&company, request.into()).await?;
    Ok(HttpResponse::Created().json(JobResponse::from(job)))
}

/// GET /jobs/company/my-jobs
///
/// Every job of the calling company, inactive ones included.
pub async fn my_jobs(
    state: web::Data<AppState>,
    CurrentCompany(company): CurrentCompany,
    query: web::Query<MyJobsQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;

    let jobs = state.jobs.company_jobs(company.id, query.page()).await?;
    Ok(HttpResponse::Ok().json(to_responses(jobs)))
}

/// GET /jobs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    let job = state.jobs.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobResponse::from(job)))
}

/// PUT /jobs/{id}
pub async fn update(
    state: web::Data<AppState>,
    CurrentCompany(company): CurrentCompany,
    path: web::Path<i64>,
    body: web::Json<UpdateJobRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let job = state
        .jobs
        .update(&company, path.into_inner(), &request.into())
        .await?;
    Ok(HttpResponse::Ok().json(JobResponse::from(job)))
}

/// DELETE /jobs/{id}
pub async fn delete(
    state: web::Data<AppState>,
    CurrentCompany(company): CurrentCompany,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.jobs.delete(&company, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
