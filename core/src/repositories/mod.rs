pub mod company;
pub mod job;
pub mod tag;
pub mod user;

pub use company::CompanyRepository;
pub use job::JobRepository;
pub use tag::TagRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mock-repositories"))]
pub use company::MockCompanyRepository;
#[cfg(any(test, feature = "mock-repositories"))]
pub use job::MockJobRepository;
#[cfg(any(test, feature = "mock-repositories"))]
pub use tag::MockTagRepository;
#[cfg(any(test, feature = "mock-repositories"))]
pub use user::MockUserRepository;
