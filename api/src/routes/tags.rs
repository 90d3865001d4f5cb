//! Tag listing

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::TagResponse;
use crate::handlers::ApiResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list)).route("/", web::get().to(list));
}

/// GET /tags/
///
/// Every tag, alphabetically.
pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let tags: Vec<TagResponse> = state
        .tags
        .list_all()
        .await?
        .into_iter()
        .map(TagResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(tags))
}
