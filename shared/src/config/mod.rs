//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token signing and password hashing configuration
//! - `database` - database connection and pool configuration
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! [`AppConfig::load`] layers the sources in this order, later ones winning:
//! built-in defaults for the environment, the optional
//! `config.<environment>.toml` file, `JOBBOARD__SECTION__KEY` variables and
//! finally the well-known flat variables (`DATABASE_URL`, `SECRET_KEY`, ...).

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

pub use ::config::ConfigError;
pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

const ENV_PREFIX: &str = "JOBBOARD";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from `.env` files, the environment's TOML file and
    /// process environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();

        Self::load_for(environment)
    }

    /// Load configuration for an explicit environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Config::try_from(&Self::for_environment(environment))?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Problems worth logging once tracing is up
    pub fn startup_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.auth.jwt.is_using_default_secret() {
            warnings.push("Using the default token secret; set SECRET_KEY before deploying");
        }
        warnings
    }

    /// Apply the well-known flat variables on top of the layered configuration
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(secret) = lookup("SECRET_KEY").or_else(|| lookup("JWT_SECRET")) {
            self.auth.jwt.secret = secret;
        }
        if let Some(algorithm) = lookup("ALGORITHM") {
            self.auth.jwt.algorithm = algorithm;
        }
        if let Some(minutes) = lookup("ACCESS_TOKEN_EXPIRE_MINUTES").and_then(|v| v.parse().ok()) {
            self.auth.jwt.access_token_expire_minutes = minutes;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
    }
}
