//! Authentication service module
//!
//! - Password login for users and companies
//! - Bearer token resolution into an [`Actor`](crate::domain::value_objects::Actor)
//! - Actor kind and active-account checks for protected routes

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
