use std::str::FromStr;

use chrono::Duration;

use crate::error::AuthError;

/// Which requests guarding strategy the server runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Every request is authorized.
    #[default]
    None,
    /// Write requests must carry the configured `X-API-KEY`.
    ApiKey,
    /// Write requests must carry a valid HS256 token.
    Jwt,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::None => "none",
            AuthMode::ApiKey => "api-key",
            AuthMode::Jwt => "jwt",
        }
    }
}

impl FromStr for AuthMode {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(AuthMode::None),
            "api-key" | "apikey" | "api_key" => Ok(AuthMode::ApiKey),
            "jwt" => Ok(AuthMode::Jwt),
            other => Err(AuthError::Config(format!("unknown AUTH_MODE: {other}"))),
        }
    }
}

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub api_key: Option<String>,
    pub jwt_secret: Option<String>,
    pub username: String,
    pub password: String,
    /// Lifetime of a token issued by `/signin`.
    pub signin_ttl: Duration,
    /// Lifetime of a token issued by `/refresh`.
    pub refresh_ttl: Duration,
    /// A token may only be refreshed once it expires within this window.
    pub refresh_window: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::None,
            api_key: None,
            jwt_secret: None,
            username: "admin".to_string(),
            password: "password".to_string(),
            signin_ttl: Duration::minutes(10),
            refresh_ttl: Duration::minutes(5),
            refresh_window: Duration::seconds(30),
        }
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH_MODE`: `none`, `api-key` or `jwt` (default: `none`)
    /// - `API_KEY`: Expected `X-API-KEY` value (required in `api-key` mode)
    /// - `JWT_SECRET`: HS256 signing secret (required in `jwt` mode)
    /// - `AUTH_USERNAME`: Sign-in username (default: `admin`)
    /// - `AUTH_PASSWORD`: Sign-in password (default: `password`)
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is unknown or its secret is missing.
    pub fn from_env() -> Result<Self, AuthError> {
        let mode = std::env::var("AUTH_MODE")
            .unwrap_or_default()
            .parse::<AuthMode>()?;

        let defaults = Self::default();

        Self {
            mode,
            api_key: non_empty_var("API_KEY"),
            jwt_secret: non_empty_var("JWT_SECRET"),
            username: non_empty_var("AUTH_USERNAME").unwrap_or(defaults.username),
            password: non_empty_var("AUTH_PASSWORD").unwrap_or(defaults.password),
            ..defaults
        }
        .validated()
    }

    /// Checks that the selected mode has the secret it needs.
    pub fn validated(self) -> Result<Self, AuthError> {
        match self.mode {
            AuthMode::ApiKey if self.api_key.is_none() => Err(AuthError::Config(
                "API_KEY must be set when AUTH_MODE=api-key".to_string(),
            )),
            AuthMode::Jwt if self.jwt_secret.is_none() => Err(AuthError::Config(
                "JWT_SECRET must be set when AUTH_MODE=jwt".to_string(),
            )),
            _ => Ok(self),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_parsing() {
        assert_eq!("none".parse::<AuthMode>().unwrap(), AuthMode::None);
        assert_eq!("".parse::<AuthMode>().unwrap(), AuthMode::None);
        assert_eq!("api-key".parse::<AuthMode>().unwrap(), AuthMode::ApiKey);
        assert_eq!("JWT".parse::<AuthMode>().unwrap(), AuthMode::Jwt);
        assert!("oauth".parse::<AuthMode>().is_err());
    }

    #[test]
    fn test_default_durations() {
        let config = AuthConfig::default();
        assert_eq!(config.signin_ttl, Duration::minutes(10));
        assert_eq!(config.refresh_ttl, Duration::minutes(5));
        assert_eq!(config.refresh_window, Duration::seconds(30));
    }

    #[test]
    fn test_api_key_mode_requires_key() {
        let config = AuthConfig {
            mode: AuthMode::ApiKey,
            ..Default::default()
        };
        assert!(matches!(config.validated(), Err(AuthError::Config(_))));

        let config = AuthConfig {
            mode: AuthMode::ApiKey,
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_jwt_mode_requires_secret() {
        let config = AuthConfig {
            mode: AuthMode::Jwt,
            ..Default::default()
        };
        assert!(matches!(config.validated(), Err(AuthError::Config(_))));
    }
}
