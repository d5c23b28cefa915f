/**
 * Server Configuration
 *
 * This module loads process configuration from the environment and
 * initializes the SQLite connection pool.
 *
 * Configuration is read once in `main` and passed down explicitly; no
 * module-level globals. Missing values fall back to development defaults
 * with a warning.
 */

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::ApiError;

/// Default database when `DATABASE_URL` is unset (local development only).
const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/authgate.db";

/// Process configuration, assembled from environment variables.
///
/// | Field          | Variable         | Default                     |
/// |----------------|------------------|-----------------------------|
/// | `database_url` | `DATABASE_URL`   | `sqlite:///tmp/authgate.db` |
/// | `jwt_secret`   | `JWT_SECRET`     | dev-only fallback           |
/// | `port`         | `PORT`           | `3001`                      |
/// | `static_dir`   | `STATIC_DIR`     | `public`                    |
/// | `token_ttl`    | `TOKEN_TTL_SECS` | `3600`                      |
#[derive(Clone)]
pub struct AppConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Shared secret for signing and verifying access tokens
    pub jwt_secret: String,
    /// TCP port to listen on
    pub port: u16,
    /// Directory served for non-API paths
    pub static_dir: PathBuf,
    /// Access token lifetime
    pub token_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Never fails; every value has a development default. Defaulted
    /// secrets are logged as warnings so they are hard to miss in
    /// production logs.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!(
                "DATABASE_URL not set, using {}",
                DEFAULT_DATABASE_URL
            );
            DEFAULT_DATABASE_URL.to_string()
        });

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using insecure development secret");
            "dev-secret-change-in-production".to_string()
        });

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3001);

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let token_ttl = std::env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(3600));

        Self {
            database_url,
            jwt_secret,
            port,
            static_dir,
            token_ttl,
        }
    }
}

/// Create the SQLite connection pool and bring the schema up to date.
///
/// The database file is created if missing, then migrations from the
/// `migrations/` directory are applied.
///
/// # Errors
///
/// Fails if the connection string is invalid, the pool cannot connect, or
/// a migration fails. Unlike optional services, the credential store is
/// required, so startup aborts on error.
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, ApiError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(ApiError::Database)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(ApiError::Database)?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
