//! Domain entities representing core business objects.

pub mod company;
pub mod job;
pub mod tag;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use company::{Company, CompanyWithJobs};
pub use job::{Job, JobDetails, JobLevel, JobType, NewJob};
pub use tag::{normalize_tag_name, normalize_tag_names, Tag, MAX_TAG_NAME_LENGTH};
pub use token::{ActorKind, Claims, TOKEN_TYPE_BEARER};
pub use user::User;
