use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Auth errors for the recipebox_auth crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Request carried no valid API key or token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Sign-in with a wrong username or password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token failed signature or expiry validation.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Refresh requested while the token still has time left.
    #[error("Token is not expired yet")]
    TokenNotExpired,

    /// Request body could not be read.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Token could not be signed.
    #[error("Failed to issue token: {0}")]
    TokenIssue(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized | AuthError::InvalidCredentials | AuthError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::TokenNotExpired | AuthError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AuthError::TokenIssue(_) | AuthError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AuthError::TokenIssue(_) | AuthError::Config(_) => {
                tracing::error!("Auth error: {}", self);
                "Internal server error".to_string()
            }
            AuthError::InvalidToken(_) => {
                tracing::debug!("Rejected token: {}", self);
                "Unauthorized".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
