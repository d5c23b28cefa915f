/**
 * Private Handler
 *
 * Implements the token-guarded endpoint GET /private. The `AuthUser`
 * extractor validates the bearer token before this handler runs; a
 * request with a missing, malformed, expired or forged token is rejected
 * with 401 and never reaches this code.
 */

use axum::response::Json;

use crate::auth::handlers::types::PrivateResponse;
use crate::middleware::auth::AuthUser;

/// Echo the identity carried by the presented token.
///
/// ```http
/// GET /private HTTP/1.1
/// Authorization: Bearer eyJ...
/// ```
///
/// responds `200 OK` with `{"logged_in_as": "user@example.com"}`.
pub async fn private(AuthUser { email }: AuthUser) -> Json<PrivateResponse> {
    Json(PrivateResponse { logged_in_as: email })
}
