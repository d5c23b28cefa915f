/**
 * Session Tokens
 *
 * This module handles issuance and validation of the stateless access
 * tokens that stand in for sessions. A token is an HS256 JWT binding the
 * authenticated identity (the email) to an expiry; there is no
 * server-side session table.
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identity: the authenticated user's email
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a signed access token for a verified identity.
///
/// # Arguments
/// * `identity` - The authenticated user's email
/// * `secret` - Shared signing secret
/// * `ttl` - Token lifetime
///
/// # Returns
/// Encoded JWT string
pub fn create_token(
    identity: &str,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        sub: identity.to_string(),
        exp: now + ttl.as_secs(),
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a token's signature and expiry and decode its claims.
///
/// Fails for malformed tokens, bad signatures (including tokens signed
/// with a different secret) and expired tokens.
pub fn verify_token(
    token: &str,
    secret: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
