//! Bearer token authentication for protected endpoints.
//!
//! The extractors read the `Authorization: Bearer <token>` header, resolve the
//! token through the [`AuthService`](jb_core::AuthService) held in
//! [`AppState`] and hand the account to the handler:
//!
//! - [`CurrentCompany`] - an active company; users get 403
//! - [`CurrentUser`] - an active user; companies get 403

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use jb_core::errors::{AuthError, DomainError};
use jb_core::{Company, User};

use crate::app::AppState;
use crate::handlers::ApiError;

/// Token from the `Authorization` header, without the `Bearer ` prefix
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn request_parts(req: &HttpRequest) -> Result<(web::Data<AppState>, String), ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| DomainError::internal("application state is not configured"))?;
    let token = extract_bearer_token(req).ok_or(AuthError::InvalidCredentials)?;
    Ok((state, token))
}

/// The authenticated company
#[derive(Debug, Clone)]
pub struct CurrentCompany(pub Company);

impl FromRequest for CurrentCompany {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parts = request_parts(req);
        Box::pin(async move {
            let (state, token) = parts?;
            let company = state.auth.authenticate_company(&token).await?;
            Ok(CurrentCompany(company))
        })
    }
}

/// The authenticated individual user
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parts = request_parts(req);
        Box::pin(async move {
            let (state, token) = parts?;
            let user = state.auth.authenticate_user(&token).await?;
            Ok(CurrentUser(user))
        })
    }
}
