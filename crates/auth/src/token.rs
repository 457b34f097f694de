//! HS256 token issuing, validation and refresh.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims carried by an issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Issued-at, seconds since the UNIX epoch.
    pub iat: i64,
    /// Expiry, seconds since the UNIX epoch.
    pub exp: i64,
}

impl Claims {
    /// Returns true if the token expires within `window` of `now`.
    pub fn expires_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.exp - now.timestamp() <= window.num_seconds()
    }
}

/// Response body of `/signin` and `/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires: DateTime<Utc>,
}

/// Signs and validates tokens with a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for `subject` that expires `ttl` after `now`.
    pub fn issue(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let expires = now + ttl;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))?;

        // Report the expiry at the precision the token carries
        let expires = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or_else(|| AuthError::TokenIssue("expiry out of range".to_string()))?;

        Ok(IssuedToken { token, expires })
    }

    /// Validates the signature and expiry of `token`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Exchanges a valid token that is about to expire for a new one.
    ///
    /// Fails with `TokenNotExpired` while more than `window` remains.
    pub fn refresh(
        &self,
        token: &str,
        ttl: Duration,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let claims = self.verify(token)?;

        if !claims.expires_within(window, now) {
            return Err(AuthError::TokenNotExpired);
        }

        tracing::debug!(subject = %claims.sub, "Refreshing token");
        self.issue(&claims.sub, ttl, now)
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// Both `Bearer <token>` and the bare token are accepted.
pub(crate) fn token_from_header(value: &str) -> &str {
    let value = value.trim();
    value.strip_prefix("Bearer ").unwrap_or(value).trim()
}
