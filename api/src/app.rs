//! Application state and factory
//!
//! This module wires the core services into [`AppState`] and builds the
//! Actix-web application around it.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use tracing_actix_web::TracingLogger;

use jb_core::errors::DomainResult;
use jb_core::repositories::{CompanyRepository, JobRepository, TagRepository, UserRepository};
use jb_core::services::{
    AuthService, CompanyService, JobService, PasswordService, TagService, TokenService,
    TokenServiceConfig, UserService,
};
use jb_shared::{AuthConfig, CorsConfig, ServerConfig};

use crate::handlers::{error, system};
use crate::middleware::create_cors;
use crate::routes;

/// Services shared by every request handler
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub companies: Arc<CompanyService>,
    pub jobs: Arc<JobService>,
    pub tags: Arc<TagService>,
}

/// Storage backends the services are built on
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub tags: Arc<dyn TagRepository>,
}

impl AppState {
    /// Build every service on top of the given repositories
    ///
    /// Fails when the configured token algorithm is not supported.
    pub fn new(repositories: Repositories, auth: &AuthConfig) -> DomainResult<Self> {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from_jwt_config(&auth.jwt)?));
        let passwords = Arc::new(PasswordService::new(auth.bcrypt_cost));
        let tags = Arc::new(TagService::new(repositories.tags));

        Ok(Self {
            auth: Arc::new(AuthService::new(
                repositories.users.clone(),
                repositories.companies.clone(),
                passwords.clone(),
                tokens,
            )),
            users: Arc::new(UserService::new(repositories.users, passwords.clone())),
            companies: Arc::new(CompanyService::new(
                repositories.companies,
                repositories.jobs.clone(),
                passwords,
            )),
            jobs: Arc::new(JobService::new(repositories.jobs, tags.clone())),
            tags,
        })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    server: &ServerConfig,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(server.max_payload_size)
                .error_handler(error::json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::FormConfig::default().error_handler(error::form_error_handler))
        // Outermost first: CORS answers preflights before anything is logged
        .wrap(TracingLogger::default())
        .wrap(create_cors(cors))
        .route("/", web::get().to(system::root))
        .route("/health", web::get().to(system::health))
        .configure(routes::configure)
        .default_service(web::route().to(system::not_found))
}
