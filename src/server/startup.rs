use crate::server::{
    config::{AppEnv, Config},
    error::AppError,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the URL from configuration, bounding connect and
/// acquire time by the configured database timeout, then runs all pending SeaORM
/// migrations so the schema is up to date before requests are served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and timeout
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.connect_timeout(config.database_timeout)
        .acquire_timeout(config.database_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrated");

    Ok(db)
}

/// Builds the HTTP client used for the auth pass-through.
///
/// Redirects are disabled and every call is bounded by `AUTH_TIMEOUT_SECS`.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.auth_timeout)
        .build()?;

    Ok(client)
}

/// Installs the global tracing subscriber for the configured environment.
///
/// `local` logs human-readable lines at debug level, `dev` logs JSON at debug level and
/// `prod` logs JSON at info level. `RUST_LOG` overrides the level when set.
pub fn init_tracing(app_env: AppEnv) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = match app_env {
        AppEnv::Local | AppEnv::Dev => "debug,sqlx=warn",
        AppEnv::Prod => "info",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match app_env {
        AppEnv::Local => registry.with(tracing_subscriber::fmt::layer()).init(),
        AppEnv::Dev | AppEnv::Prod => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
