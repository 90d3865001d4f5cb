//! Value objects representing immutable domain concepts.

pub mod actor;
pub mod auth_response;
pub mod job_filter;
pub mod patch;
pub mod registration;

// Re-export commonly used types
pub use actor::Actor;
pub use auth_response::AuthResponse;
pub use job_filter::JobFilter;
pub use patch::{CompanyPatch, JobPatch, UserPatch};
pub use registration::{CompanyRegistration, UserRegistration};
