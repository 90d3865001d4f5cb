//! # JobBoard Core
//!
//! Core business logic and domain layer for the JobBoard backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    ActorKind, Claims, Company, CompanyWithJobs, Job, JobDetails, JobLevel, JobType, NewJob, Tag,
    User,
};
pub use domain::value_objects::{
    Actor, AuthResponse, CompanyPatch, CompanyRegistration, JobFilter, JobPatch, UserPatch,
    UserRegistration,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{CompanyRepository, JobRepository, TagRepository, UserRepository};
pub use services::{
    AuthService, CompanyService, JobService, PasswordService, TagService, TokenService,
    TokenServiceConfig, UserService,
};
