/**
 * Login Handler
 *
 * Implements credential verification and token issuance for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by exact email match
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a signed access token bound to the email
 *
 * # Security
 *
 * - Every verification failure (missing field, unknown email, wrong
 *   password) answers with the same 401 body, so responses do not reveal
 *   whether an account exists
 * - bcrypt verification is constant-time with respect to the password
 * - Read-only: no state changes on either outcome
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::find_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - `{"msg": "Bad email or password"}` for any
///   verification failure
/// * `500 Internal Server Error` - database or token issuance failure
///
/// # Example
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "hunter22"}
/// ```
///
/// responds `200 OK` with `{"access_token": "eyJ..."}`.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Missing fields fall through to the same uniform 401 as a wrong
    // password would.
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            tracing::warn!("Login rejected: missing email or password");
            return Err(ApiError::InvalidCredentials);
        }
    };

    tracing::info!("Login request for email: {}", email);

    let user = find_user_by_email(&state.db_pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", email);
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed for: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = create_token(&user.email, &state.jwt_secret, state.token_ttl)?;
    tracing::info!("User logged in: {}", user.email);

    Ok(Json(TokenResponse { access_token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::verify_token;
    use crate::auth::users::create_user;
    use crate::server::state::test_support::test_state;

    async fn seed_user(state: &AppState, email: &str, password: &str) {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).unwrap();
        create_user(&state.db_pool, email, &password_hash)
            .await
            .unwrap();
    }

    fn request(email: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_token_for_identity() {
        let state = test_state().await;
        seed_user(&state, "test@example.com", "password123").await;

        let result = login(
            State(state.clone()),
            Json(request(Some("test@example.com"), Some("password123"))),
        )
        .await;

        let body = result.unwrap();
        let claims = verify_token(&body.access_token, &state.jwt_secret).unwrap();
        assert_eq!(claims.sub, "test@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = test_state().await;
        seed_user(&state, "test@example.com", "password123").await;

        let result = login(
            State(state),
            Json(request(Some("test@example.com"), Some("wrong"))),
        )
        .await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let state = test_state().await;

        let result = login(
            State(state),
            Json(request(Some("nobody@example.com"), Some("password123"))),
        )
        .await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_missing_fields_same_error() {
        let state = test_state().await;

        let result = login(State(state.clone()), Json(request(None, Some("pw")))).await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidCredentials));

        let result = login(State(state), Json(request(Some("a@x.com"), None))).await;
        assert!(matches!(result.unwrap_err(), ApiError::InvalidCredentials));
    }
}
