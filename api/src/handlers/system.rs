//! Root, health and fallback endpoints

use actix_web::{HttpRequest, HttpResponse};

use jb_shared::{error_codes, ErrorResponse, HealthResponse, WelcomeResponse};

pub const SERVICE_NAME: &str = "jobboard-api";

/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to the Job Board API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health
///
/// Liveness only; database connectivity is verified once at start-up.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    tracing::debug!(path = req.path(), "No route matched");
    HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, "Not found"))
}
