/**
 * Authentication Handler Types
 *
 * Request and response bodies for the authentication endpoints. Fields
 * on the request types are `Option` so that missing keys reach the
 * handler (to be answered with this API's own 400/401 shapes) instead of
 * being rejected by the JSON extractor.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (hashed before storage)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (verified against the stored hash)
    pub password: Option<String>,
}

/// Successful login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
}

/// Successful signup response
#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    /// Confirmation message
    pub message: String,
}

/// Response from the token-guarded endpoint
#[derive(Serialize, Deserialize, Debug)]
pub struct PrivateResponse {
    /// Identity carried by the presented token
    pub logged_in_as: String,
}
