//! Company registration and profile endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CompanyResponse, RegisterCompanyRequest, UpdateCompanyRequest};
use crate::handlers::ApiResult;
use crate::middleware::CurrentCompany;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Literal segments before `/{id}`
    cfg.route("", web::get().to(list))
        .route("/", web::get().to(list))
        .route("/register", web::post().to(register))
        .route("/me", web::get().to(me))
        .route("/me", web::put().to(update_me))
        .route("/{id}", web::get().to(get));
}

/// GET /companies/
pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let companies: Vec<CompanyResponse> = state
        .companies
        .list()
        .await?
        .into_iter()
        .map(CompanyResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(companies))
}

/// POST /companies/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterCompanyRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let company = state.companies.register(request.into()).await?;
    let company = state.companies.with_jobs(company).await?;
    Ok(HttpResponse::Created().json(CompanyResponse::from(company)))
}

/// GET /companies/me
pub async fn me(
    state: web::Data<AppState>,
    CurrentCompany(company): CurrentCompany,
) -> ApiResult<HttpResponse> {
    let company = state.companies.with_jobs(company).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse::from(company)))
}

/// PUT /companies/me
pub async fn update_me(
    state: web::Data<AppState>,
    CurrentCompany(company): CurrentCompany,
    body: web::Json<UpdateCompanyRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let company = state.companies.update_profile(company, &request.into()).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse::from(company)))
}

/// GET /companies/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> ApiResult<HttpResponse> {
    let company = state.companies.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse::from(company)))
}
