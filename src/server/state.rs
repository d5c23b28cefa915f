/**
 * Application State
 *
 * Shared state handed to every request handler. Cloning is cheap: the
 * pool is reference-counted and the rest is small.
 */

use std::time::Duration;

use sqlx::SqlitePool;

/// Shared application state.
///
/// Constructed once in `create_app` from the loaded configuration and
/// database pool, then cloned into each handler by Axum.
#[derive(Clone)]
pub struct AppState {
    /// Credential store connection pool
    pub db_pool: SqlitePool,
    /// Shared secret for signing and verifying access tokens
    pub jwt_secret: String,
    /// Access token lifetime
    pub token_ttl: Duration,
}
