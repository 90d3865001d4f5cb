//! Sign-up input for both account kinds.

/// Data needed to register an individual user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistration {
    pub email: String,
    pub full_name: String,
    /// Plain password, hashed by the user service
    pub password: String,
}

/// Data needed to register a company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRegistration {
    pub email: String,
    pub company_name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    /// Plain password, hashed by the company service
    pub password: String,
}
