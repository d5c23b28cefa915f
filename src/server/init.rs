/**
 * Server Initialization
 *
 * Builds the Axum application from an `AppConfig`: connects the
 * credential store, assembles shared state, and configures the router.
 *
 * # Initialization Steps
 *
 * 1. Connect the SQLite pool and run migrations
 * 2. Build `AppState` (pool, token secret, token lifetime)
 * 3. Create the router with API routes and the static-file fallback
 *
 * The credential store is required; any failure here aborts startup
 * rather than starting a server that cannot authenticate anyone.
 */

use axum::Router;

use crate::error::ApiError;
use crate::routes::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Arguments
///
/// * `config` - Process configuration, loaded by the caller
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router, ApiError> {
    tracing::info!("Initializing authgate server");

    let db_pool = load_database(config).await?;

    let state = AppState {
        db_pool,
        jwt_secret: config.jwt_secret.clone(),
        token_ttl: config.token_ttl,
    };

    let app = create_router(state, &config.static_dir);
    tracing::info!("Router configured");

    Ok(app)
}
