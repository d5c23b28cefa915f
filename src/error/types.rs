/**
 * API Error Types
 *
 * This module defines the error type used across handlers and server
 * setup. Each variant maps to an HTTP status code; conversion to a
 * response body lives in `error::conversion`.
 *
 * # Error Categories
 *
 * - `Validation` - malformed or incomplete request input (400)
 * - `InvalidCredentials` - login failed; uniform regardless of whether the
 *   email or the password was wrong, so callers cannot enumerate accounts (401)
 * - `Unauthorized` - missing, malformed, expired or forged bearer token (401)
 * - `DuplicateEmail` - signup with an email that is already registered (409)
 * - `Database` / `Migration` / `PasswordHash` / `Token` - internal failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All errors that can surface from the authentication backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request input failed validation (e.g. missing email or password)
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// Credential verification failed.
    ///
    /// Deliberately carries no detail: "user not found" and "wrong
    /// password" must be indistinguishable to the client.
    #[error("bad email or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, expired or not verifiable
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// Signup attempted with an email that already exists
    #[error("email already registered")]
    DuplicateEmail,

    /// Database query failure
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Database migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification failure
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token issuance failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Database(_)
            | Self::Migration(_)
            | Self::PasswordHash(_)
            | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    /// A unique-constraint violation on insert means a concurrent or prior
    /// signup already took the email; everything else is an internal error.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::DuplicateEmail;
            }
        }
        Self::Database(err)
    }
}
