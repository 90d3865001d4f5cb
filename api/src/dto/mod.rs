//! Request and response bodies of the HTTP API.

pub mod auth;
pub mod company;
pub mod job;
pub mod tag;
pub mod user;

pub use auth::{LoginForm, TokenResponse};
pub use company::{CompanyResponse, RegisterCompanyRequest, UpdateCompanyRequest};
pub use job::{CreateJobRequest, JobQuery, JobResponse, JobSummary, MyJobsQuery, UpdateJobRequest};
pub use tag::TagResponse;
pub use user::{RegisterUserRequest, UpdateUserRequest, UserResponse};

use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit `null` from an absent field
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: absent gives `None`, `null` gives `Some(None)`.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn default_limit() -> u32 {
    jb_shared::types::DEFAULT_LIMIT
}
