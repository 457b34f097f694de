use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::token::{token_from_header, TokenIssuer};

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Decides whether a request may perform a write.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self, headers: &HeaderMap) -> bool;
}

/// Authorizes every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Authorizer for AllowAll {
    fn is_authorized(&self, _headers: &HeaderMap) -> bool {
        true
    }
}

/// Authorizes requests whose `X-API-KEY` header equals the configured key.
#[derive(Debug, Clone)]
pub struct ApiKeyAuthorizer {
    key: String,
}

impl ApiKeyAuthorizer {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Authorizer for ApiKeyAuthorizer {
    fn is_authorized(&self, headers: &HeaderMap) -> bool {
        headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value == self.key)
    }
}

/// Authorizes requests whose `Authorization` header holds a valid token.
#[derive(Clone)]
pub struct JwtAuthorizer {
    issuer: TokenIssuer,
}

impl JwtAuthorizer {
    pub fn new(issuer: TokenIssuer) -> Self {
        Self { issuer }
    }
}

impl Authorizer for JwtAuthorizer {
    fn is_authorized(&self, headers: &HeaderMap) -> bool {
        let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
            return false;
        };

        match self.issuer.verify(token_from_header(value)) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "Token rejected");
                false
            }
        }
    }
}
