//! Authgate - Minimal Authentication REST Backend
//!
//! Authgate is a small Axum HTTP server exposing a credential-based
//! authentication core backed by SQLite:
//!
//! - `POST /signup` - create a user (bcrypt-hashed password)
//! - `POST /login`  - verify credentials, issue a JWT access token
//! - `GET /private` - token-guarded endpoint returning the caller identity
//!
//! Any other path is served from a static directory with an `index.html`
//! fallback, so a single-page client can be hosted by the same process.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, shared state, app construction
//! - **`routes`** - Router assembly and static-file fallback
//! - **`auth`**   - User store, JWT sessions, HTTP handlers
//! - **`middleware`** - The `AuthUser` bearer-token extractor
//! - **`error`**  - `ApiError` and its HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::server::{config::AppConfig, create_app};
//!
//! # async fn example() -> Result<(), authgate::error::ApiError> {
//! let config = AppConfig::from_env();
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Server setup, configuration and shared state
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: user store, sessions, handlers
pub mod auth;

/// Request middleware (bearer-token extraction)
pub mod middleware;

/// Error types and HTTP conversion
pub mod error;

pub use error::ApiError;
pub use server::create_app;
