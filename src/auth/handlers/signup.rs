/**
 * Signup Handler
 *
 * Implements user registration for POST /signup.
 *
 * # Registration Process
 *
 * 1. Require both email and password (400 otherwise)
 * 2. Refuse emails that are already registered (409)
 * 3. Hash the password with bcrypt
 * 4. Insert the user row
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (DEFAULT_COST) before storage
 * - The UNIQUE constraint on email backs up the existence pre-check, so
 *   a concurrent duplicate signup still gets a 409 rather than silently
 *   creating a second row
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::auth::users::{create_user, find_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing or empty
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "hunter22"}
/// ```
///
/// responds `201 Created` with `{"message": "user successfully created"}`.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            tracing::warn!("Signup rejected: missing email or password");
            return Err(ApiError::validation("email and password required"));
        }
    };

    tracing::info!("Signup request for email: {}", email);

    // Friendly path for the common case; the UNIQUE constraint catches
    // the race this check cannot.
    if find_user_by_email(&state.db_pool, &email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash(&password, DEFAULT_COST)?;

    let user = create_user(&state.db_pool, &email, &password_hash).await?;
    tracing::info!("User created: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "user successfully created".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::test_support::test_state;

    fn request(email: Option<&str>, password: Option<&str>) -> SignupRequest {
        SignupRequest {
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_signup_success() {
        let state = test_state().await;

        let result = signup(
            State(state.clone()),
            Json(request(Some("new@example.com"), Some("password123"))),
        )
        .await;

        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, "user successfully created");

        // Stored hash is salted, never the plaintext
        let user = find_user_by_email(&state.db_pool, "new@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(user.password_hash, "password123");
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_signup_missing_email() {
        let state = test_state().await;
        let result = signup(State(state), Json(request(None, Some("password123")))).await;
        assert!(matches!(result.unwrap_err(), ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_signup_missing_password() {
        let state = test_state().await;
        let result = signup(State(state), Json(request(Some("a@x.com"), None))).await;
        assert!(matches!(result.unwrap_err(), ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_signup_empty_fields() {
        let state = test_state().await;
        let result = signup(State(state), Json(request(Some(""), Some("")))).await;
        assert!(matches!(result.unwrap_err(), ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let state = test_state().await;

        let first = signup(
            State(state.clone()),
            Json(request(Some("dup@example.com"), Some("password123"))),
        )
        .await;
        assert!(first.is_ok());

        let second = signup(
            State(state),
            Json(request(Some("dup@example.com"), Some("password456"))),
        )
        .await;
        assert!(matches!(second.unwrap_err(), ApiError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_signup_race_hits_constraint() {
        let state = test_state().await;

        // Simulate losing the race: the row appears after the handler's
        // pre-check would have passed.
        create_user(&state.db_pool, "race@example.com", "hash")
            .await
            .unwrap();

        let result = create_user(&state.db_pool, "race@example.com", "hash2")
            .await
            .map_err(ApiError::from);
        assert!(matches!(result.unwrap_err(), ApiError::DuplicateEmail));
    }
}
