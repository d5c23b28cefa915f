/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * Two body shapes are used, matching what clients of this API expect:
 *
 * - Validation failures: `{"message": "..."}` (the signup error shape)
 * - Auth failures (401/409): `{"msg": "..."}`
 * - Internal errors: `{"msg": "internal server error"}` with the detail
 *   logged server-side only
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation { message } => {
                serde_json::json!({ "message": message })
            }
            ApiError::InvalidCredentials => {
                serde_json::json!({ "msg": "Bad email or password" })
            }
            ApiError::Unauthorized { message } => {
                serde_json::json!({ "msg": message })
            }
            ApiError::DuplicateEmail => {
                serde_json::json!({ "msg": "email already registered" })
            }
            // Internal failures: log the detail, return a generic body
            _ => {
                tracing::error!("Internal error: {:?}", self);
                serde_json::json!({ "msg": "internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}
