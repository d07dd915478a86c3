//! Hook error taxonomy and HTTP mapping
//!
//! Every variant carries an explicit kind; the HTTP-equivalent status and the
//! stable error code are maintained separately from the error object itself.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Result type for hook execution.
pub type Result<T> = std::result::Result<T, HookError>;

/// Errors surfaced by pipeline hooks.
///
/// No hook retries anything: every failure is terminal for the current
/// request and flows to the host's error-handling layer.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// Request lacked a required token, or the token failed verification.
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    /// Misconfiguration or missing upstream authentication state.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Hook invoked outside the phase it is designed for.
    #[error("Hook misuse: {0}")]
    Usage(String),
}

impl HookError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HookError::NotAuthenticated(_) => StatusCode::UNAUTHORIZED,
            HookError::Configuration(_) | HookError::Usage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            HookError::NotAuthenticated(_) => "NOT_AUTHENTICATED",
            HookError::Configuration(_) => "CONFIGURATION_ERROR",
            HookError::Usage(_) => "HOOK_MISUSE",
        }
    }
}

impl IntoResponse for HookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Log internal errors with full context
        if matches!(status, StatusCode::INTERNAL_SERVER_ERROR) {
            tracing::error!(error = %self, "Hook failed");
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
