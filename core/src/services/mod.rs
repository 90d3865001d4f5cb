//! Business services containing domain logic and use cases.

pub mod auth;
pub mod company;
pub mod job;
pub mod password;
pub mod tag;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::AuthService;
pub use company::CompanyService;
pub use job::JobService;
pub use password::PasswordService;
pub use tag::TagService;
pub use token::{TokenService, TokenServiceConfig};
pub use user::UserService;
