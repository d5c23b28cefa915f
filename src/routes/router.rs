/**
 * Router Configuration
 *
 * Combines the authentication endpoints and the static-file fallback into
 * a single Axum router.
 *
 * # Route Order
 *
 * API routes are registered first so they always win over the static
 * fallback; every unmatched path is attempted as a static file, falling
 * back to `index.html` so client-side routing keeps working after a page
 * reload (the usual single-page-app arrangement).
 */

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::auth::handlers::{login, private, signup};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `static_dir` - Directory served for non-API paths
///
/// # Routes
///
/// - `POST /signup` - User registration (201 on success)
/// - `POST /login` - Returns `{"access_token": ...}` on success
/// - `GET /private` - Requires `Authorization: Bearer <token>`
/// - `/*` - Static files from `static_dir`, `index.html` fallback
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let static_files = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/private", get(private))
        .fallback_service(static_files)
        .with_state(state)
}
