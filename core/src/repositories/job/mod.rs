pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use r#trait::JobRepository;

#[cfg(any(test, feature = "mock-repositories"))]
pub mod mock;
#[cfg(any(test, feature = "mock-repositories"))]
pub use mock::MockJobRepository;

#[cfg(test)]
mod tests;
