//! Middleware Module
//!
//! Request-processing middleware. Currently holds the bearer-token
//! extractor guarding protected routes.

/// Bearer-token extraction and verification
pub mod auth;

pub use auth::AuthUser;
