//! Login endpoints
//!
//! Both take an OAuth2 password-flow form (`username`, `password`) and answer
//! with a bearer token whose `user_type` claim names the account kind.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{LoginForm, TokenResponse};
use crate::handlers::ApiResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/company/login", web::post().to(company_login))
        .route("/user/login", web::post().to(user_login));
}

/// POST /auth/company/login
pub async fn company_login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    form.validate()?;

    let response = state.auth.login_company(&form.username, &form.password).await?;
    Ok(HttpResponse::Ok().json(TokenResponse::from(response)))
}

/// POST /auth/user/login
pub async fn user_login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    form.validate()?;

    let response = state.auth.login_user(&form.username, &form.password).await?;
    Ok(HttpResponse::Ok().json(TokenResponse::from(response)))
}
