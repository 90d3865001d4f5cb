//! Application wired to the in-memory repositories

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};

use jb_api::{create_app, AppState, Repositories};
use jb_core::repositories::{
    MockCompanyRepository, MockJobRepository, MockTagRepository, MockUserRepository,
};
use jb_core::{CompanyRegistration, NewJob, UserRegistration};
use jb_shared::{AuthConfig, CorsConfig, JwtConfig, ServerConfig};

pub const PASSWORD: &str = "correct-horse-battery";

pub fn state() -> web::Data<AppState> {
    let companies = Arc::new(MockCompanyRepository::new());
    let tags = Arc::new(MockTagRepository::new());
    let jobs = Arc::new(MockJobRepository::new(companies.clone(), tags.clone()));

    let repositories = Repositories {
        users: Arc::new(MockUserRepository::new()),
        companies,
        jobs,
        tags,
    };
    // Minimum bcrypt cost keeps the suite fast
    let auth = AuthConfig::new(JwtConfig::new("api-test-secret")).with_bcrypt_cost(4);
    web::Data::new(AppState::new(repositories, &auth).unwrap())
}

pub fn app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    create_app(state, &ServerConfig::default(), &CorsConfig::default())
}

/// Registers a company and returns its ID and bearer token
pub async fn company(state: &AppState, email: &str) -> (i64, String) {
    let company = state
        .companies
        .register(CompanyRegistration {
            email: email.to_string(),
            company_name: format!("Company {}", email),
            description: None,
            website: None,
            location: None,
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();
    let token = state.auth.login_company(email, PASSWORD).await.unwrap();
    (company.id, token.access_token)
}

/// Registers a user and returns their bearer token
pub async fn user(state: &AppState, email: &str) -> String {
    state
        .users
        .register(UserRegistration {
            email: email.to_string(),
            full_name: "Test User".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();
    state.auth.login_user(email, PASSWORD).await.unwrap().access_token
}

/// Posts a job for the company owning `token`, straight through the service
pub async fn job(state: &AppState, token: &str, title: &str, tags: &[&str]) -> i64 {
    let company = state.auth.authenticate_company(token).await.unwrap();
    let new_job = NewJob {
        title: title.to_string(),
        description: format!("{} description", title),
        tag_names: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    };
    state.jobs.create(&company, new_job).await.unwrap().job.id
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
