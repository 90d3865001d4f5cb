//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::{ActorKind, Company, User};
use crate::domain::value_objects::{Actor, AuthResponse};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{CompanyRepository, UserRepository};
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

/// Authentication service for logins and bearer token resolution
pub struct AuthService {
    /// User repository for account lookups
    users: Arc<dyn UserRepository>,
    /// Company repository for account lookups
    companies: Arc<dyn CompanyRepository>,
    /// Password hashing
    passwords: Arc<PasswordService>,
    /// Token service for JWT management
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        companies: Arc<dyn CompanyRepository>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            companies,
            passwords,
            tokens,
        }
    }

    /// Log a company in with email and password
    ///
    /// Unknown email and wrong password fail identically. A deactivated
    /// company with the right password gets `InactiveCompanyAccount`.
    pub async fn login_company(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let company = self
            .companies
            .find_by_email(email)
            .await?
            .ok_or(AuthError::IncorrectCredentials)?;

        if !self.passwords.verify(password, &company.hashed_password).await {
            return Err(AuthError::IncorrectCredentials.into());
        }

        if !company.is_active {
            return Err(AuthError::InactiveCompanyAccount.into());
        }

        let token = self.tokens.issue_access_token(&company.email, ActorKind::Company)?;
        tracing::info!(company_id = company.id, "Company logged in");
        Ok(AuthResponse::bearer(token))
    }

    /// Log a user in with email and password
    pub async fn login_user(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::IncorrectCredentials)?;

        if !self.passwords.verify(password, &user.hashed_password).await {
            return Err(AuthError::IncorrectCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::InactiveUserAccount.into());
        }

        let token = self.tokens.issue_access_token(&user.email, ActorKind::User)?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(AuthResponse::bearer(token))
    }

    /// Resolve a bearer token to the account it names
    ///
    /// Every token problem (bad signature, expiry, missing or unknown
    /// `user_type`, no matching account) collapses into
    /// `AuthError::InvalidCredentials`. Storage errors pass through.
    pub async fn resolve_actor(&self, token: &str) -> DomainResult<Actor> {
        let claims = self.tokens.verify_access_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            DomainError::from(AuthError::InvalidCredentials)
        })?;

        let actor = match claims.actor_kind() {
            Some(ActorKind::Company) => self.companies.find_by_email(&claims.sub).await?.map(Actor::Company),
            Some(ActorKind::User) => self.users.find_by_email(&claims.sub).await?.map(Actor::User),
            None => None,
        };

        actor.ok_or_else(|| AuthError::InvalidCredentials.into())
    }

    /// Resolve a token to an active company; users are rejected first,
    /// then inactive companies
    pub async fn authenticate_company(&self, token: &str) -> DomainResult<Company> {
        let company = self.resolve_actor(token).await?.into_company()?;
        if !company.is_active {
            return Err(AuthError::InactiveCompany.into());
        }
        Ok(company)
    }

    /// Resolve a token to an active user
    pub async fn authenticate_user(&self, token: &str) -> DomainResult<User> {
        let user = self.resolve_actor(token).await?.into_user()?;
        if !user.is_active {
            return Err(AuthError::InactiveUser.into());
        }
        Ok(user)
    }
}
