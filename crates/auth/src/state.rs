//! Shared state for auth handlers and middleware.

use std::sync::Arc;

use crate::authorizer::{AllowAll, ApiKeyAuthorizer, Authorizer, JwtAuthorizer};
use crate::config::{AuthConfig, AuthMode};
use crate::error::AuthError;
use crate::token::TokenIssuer;

/// Shared state for auth handlers.
#[derive(Clone)]
pub struct AuthState {
    pub authorizer: Arc<dyn Authorizer>,
    pub config: AuthConfig,
    tokens: Option<TokenIssuer>,
}

impl AuthState {
    /// Builds the authorizer selected by `config.mode`.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the mode's secret is missing.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let config = config.validated()?;

        let (authorizer, tokens): (Arc<dyn Authorizer>, Option<TokenIssuer>) = match config.mode {
            AuthMode::None => (Arc::new(AllowAll), None),
            AuthMode::ApiKey => {
                let key = config.api_key.clone().unwrap_or_default();
                (Arc::new(ApiKeyAuthorizer::new(key)), None)
            }
            AuthMode::Jwt => {
                let secret = config.jwt_secret.as_deref().unwrap_or_default();
                let issuer = TokenIssuer::new(secret);
                (Arc::new(JwtAuthorizer::new(issuer.clone())), Some(issuer))
            }
        };

        tracing::info!(mode = config.mode.as_str(), "Authorization configured");

        Ok(Self {
            authorizer,
            config,
            tokens,
        })
    }

    /// State that authorizes everything.
    pub fn allow_all() -> Self {
        Self {
            authorizer: Arc::new(AllowAll),
            config: AuthConfig::default(),
            tokens: None,
        }
    }

    /// Returns true if `/signin` and `/refresh` should be served.
    pub fn issues_tokens(&self) -> bool {
        self.tokens.is_some()
    }

    /// Gets the token issuer.
    ///
    /// # Errors
    ///
    /// Returns `Config` outside `jwt` mode.
    pub fn tokens(&self) -> Result<&TokenIssuer, AuthError> {
        self.tokens
            .as_ref()
            .ok_or_else(|| AuthError::Config("token issuing requires AUTH_MODE=jwt".to_string()))
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::allow_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_mode_does_not_issue_tokens() {
        let state = AuthState::new(AuthConfig::default()).unwrap();
        assert!(!state.issues_tokens());
        assert!(state.tokens().is_err());
    }

    #[test]
    fn test_jwt_mode_issues_tokens() {
        let state = AuthState::new(AuthConfig {
            mode: AuthMode::Jwt,
            jwt_secret: Some("secret".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(state.issues_tokens());
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let result = AuthState::new(AuthConfig {
            mode: AuthMode::Jwt,
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
