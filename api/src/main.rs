use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jb_api::{create_app, AppState, Repositories};
use jb_infra::{
    DatabasePool, MySqlCompanyRepository, MySqlJobRepository, MySqlTagRepository,
    MySqlUserRepository,
};
use jb_shared::{AppConfig, LogFormat, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(logging.source_location)
                    .with_line_number(logging.source_location),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(logging.source_location)
                    .with_line_number(logging.source_location),
            )
            .init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);
    for warning in config.startup_warnings() {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        environment = ?config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting JobBoard API server"
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if !pool.health_check().await.context("database health check failed")? {
        anyhow::bail!("database health check failed");
    }
    if config.database.run_migrations {
        pool.run_migrations().await.context("failed to run migrations")?;
    }

    let db = pool.get_pool().clone();
    let repositories = Repositories {
        users: Arc::new(MySqlUserRepository::new(db.clone())),
        companies: Arc::new(MySqlCompanyRepository::new(db.clone())),
        jobs: Arc::new(MySqlJobRepository::new(db.clone())),
        tags: Arc::new(MySqlTagRepository::new(db)),
    };
    let state = web::Data::new(
        AppState::new(repositories, &config.auth).context("invalid authentication settings")?,
    );

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let server_config = config.server.clone();
    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || {
        create_app(state.clone(), &server_config, &cors_config)
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    pool.close().await;
    tracing::info!("Server stopped");
    result.map_err(Into::into)
}
