//! Access token claims and the actor kinds they carry.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// `token_type` returned alongside every access token
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Which account table a token subject lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    User,
    Company,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::User => "user",
            ActorKind::Company => "company",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ActorKind::User),
            "company" => Ok(ActorKind::Company),
            _ => Err(format!("Unknown actor kind: {}", s)),
        }
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,

    /// "user" or "company"; kept as a raw string so unknown values decode
    /// and can be rejected by the resolver
    #[serde(default)]
    pub user_type: Option<String>,

    /// Expiration timestamp
    pub exp: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new access token claims expiring after `expiry_minutes`
    pub fn new_access_token(email: &str, kind: ActorKind, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: email.to_string(),
            user_type: Some(kind.as_str().to_string()),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// The actor kind, if the claim is present and known
    pub fn actor_kind(&self) -> Option<ActorKind> {
        self.user_type.as_deref().and_then(|t| t.parse().ok())
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
