/**
 * Authentication Extractor
 *
 * Guards protected routes. `AuthUser` is an Axum extractor that reads
 * the `Authorization: Bearer <token>` header, verifies the token's
 * signature and expiry, and hands the embedded identity to the handler.
 * Handlers taking an `AuthUser` parameter therefore never see an
 * unauthenticated request.
 */

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity extracted from a verified bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// The identity the token was issued for
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::unauthorized("Missing Authorization Header")
            })?;

        // Expected format: "Bearer <token>"
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::unauthorized("Invalid Authorization Header")
        })?;

        let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
            tracing::warn!("Token rejected: {:?}", e.kind());
            ApiError::unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser { email: claims.sub })
    }
}
