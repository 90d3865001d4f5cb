//! HTTP route handlers grouped by resource
//!
//! - `auth` - password logins for both account kinds
//! - `companies` - company registration and profiles
//! - `users` - user registration and profiles
//! - `jobs` - job postings and search
//! - `tags` - tag listing

pub mod auth;
pub mod companies;
pub mod jobs;
pub mod tags;
pub mod users;

use actix_web::web;

/// Register every resource scope on the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").configure(auth::configure))
        .service(web::scope("/companies").configure(companies::configure))
        .service(web::scope("/users").configure(users::configure))
        .service(web::scope("/jobs").configure(jobs::configure))
        .service(web::scope("/tags").configure(tags::configure));
}
