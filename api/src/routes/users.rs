//! User registration and profile endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{RegisterUserRequest, UpdateUserRequest, UserResponse};
use crate::handlers::ApiResult;
use crate::middleware::CurrentUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/me", web::get().to(me))
        .route("/me", web::put().to(update_me));
}

/// POST /users/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let user = state.users.register(request.into()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// GET /users/me
pub async fn me(CurrentUser(user): CurrentUser) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// PUT /users/me
pub async fn update_me(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    body: web::Json<UpdateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = body.into_inner();
    request.validate()?;

    let user = state.users.update_profile(user, &request.into()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
