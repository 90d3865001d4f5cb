//! The authenticated principal behind a request.

use crate::domain::entities::{Company, User};
use crate::errors::{AuthError, DomainResult};

/// Either kind of account a bearer token can resolve to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    User(User),
    Company(Company),
}

impl Actor {
    /// Narrows to a company, rejecting users
    pub fn into_company(self) -> DomainResult<Company> {
        match self {
            Actor::Company(company) => Ok(company),
            Actor::User(_) => Err(AuthError::CompanyOnly.into()),
        }
    }

    /// Narrows to a user, rejecting companies
    pub fn into_user(self) -> DomainResult<User> {
        match self {
            Actor::User(user) => Ok(user),
            Actor::Company(_) => Err(AuthError::UserOnly.into()),
        }
    }
}
