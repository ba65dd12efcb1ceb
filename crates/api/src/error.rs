//! JSON error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use aerodesk_core::reports::ReportError;
use aerodesk_shared::AppError;

/// Error returned by handlers and middleware, rendered as `{ "error", "message" }`.
///
/// The code defaults to the [`AppError`] code; session and login failures
/// carry a more specific one.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    code: &'static str,
}

impl ApiError {
    /// Wraps an error with a code other than its default.
    #[must_use]
    pub const fn with_code(error: AppError, code: &'static str) -> Self {
        Self { error, code }
    }

    /// No session token was presented.
    #[must_use]
    pub fn missing_session() -> Self {
        Self::with_code(
            AppError::Unauthorized("A valid session is required".to_string()),
            "MISSING_SESSION",
        )
    }

    /// The session token or its user is no longer valid.
    #[must_use]
    pub fn invalid_session(message: &str) -> Self {
        Self::with_code(AppError::Unauthorized(message.to_string()), "INVALID_SESSION")
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        let code = error.error_code();
        Self { error, code }
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        if err.is_client_error() {
            return AppError::Validation(err.to_string()).into();
        }

        error!(error = %err, "Report generation failed");
        AppError::Database(err.to_string()).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server-side details stay in the logs.
        let message = if self.error.is_server_error() {
            "An internal error occurred".to_string()
        } else {
            self.error.to_string()
        };

        (
            self.status(),
            Json(json!({
                "error": self.code,
                "message": message
            })),
        )
            .into_response()
    }
}

/// Gives the empty 408 produced by the timeout layer the standard error body.
pub(crate) async fn timeout_body(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    ApiError::from(AppError::Timeout("the server did not respond in time".to_string()))
        .into_response()
}
