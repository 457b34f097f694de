//! HTTP handlers for auth routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AuthError;
use crate::token::{token_from_header, IssuedToken};
use crate::AuthState;

/// Sign-in request body.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Creates the auth router.
///
/// Routes:
/// - `POST /signin` - Exchange credentials for a token
/// - `POST /refresh` - Exchange a token close to expiry for a fresh one
pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/signin", post(signin))
        .route("/refresh", post(refresh))
}

/// POST /signin
async fn signin(
    State(auth): State<AuthState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<IssuedToken>, AuthError> {
    let Json(credentials) = payload.map_err(|e| AuthError::InvalidRequest(e.body_text()))?;

    if credentials.username != auth.config.username || credentials.password != auth.config.password
    {
        tracing::warn!(username = %credentials.username, "Sign-in rejected");
        return Err(AuthError::InvalidCredentials);
    }

    let issued = auth
        .tokens()?
        .issue(&credentials.username, auth.config.signin_ttl, Utc::now())?;

    tracing::info!(username = %credentials.username, expires = %issued.expires, "Token issued");
    Ok(Json(issued))
}

/// POST /refresh
async fn refresh(
    State(auth): State<AuthState>,
    headers: HeaderMap,
) -> Result<Json<IssuedToken>, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let issued = auth.tokens()?.refresh(
        token_from_header(header),
        auth.config.refresh_ttl,
        auth.config.refresh_window,
        Utc::now(),
    )?;

    Ok(Json(issued))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, AuthMode};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Duration;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn jwt_state() -> AuthState {
        AuthState::new(AuthConfig {
            mode: AuthMode::Jwt,
            jwt_secret: Some("test-secret".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn app(state: AuthState) -> Router {
        auth_routes().with_state(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_signin_issues_token() {
        let state = jwt_state();
        let before = Utc::now();

        let response = app(state.clone())
            .oneshot(post_json(
                "/signin",
                r#"{"username": "admin", "password": "password"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let issued: IssuedToken = serde_json::from_value(body_json(response).await).unwrap();
        let claims = state.tokens().unwrap().verify(&issued.token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(issued.expires >= before + Duration::minutes(10) - Duration::seconds(1));
    }

    #[tokio::test]
    async fn test_signin_wrong_password() {
        let response = app(jwt_state())
            .oneshot(post_json(
                "/signin",
                r#"{"username": "admin", "password": "nope"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["error"],
            "Invalid username or password"
        );
    }

    #[tokio::test]
    async fn test_signin_malformed_body() {
        let response = app(jwt_state())
            .oneshot(post_json("/signin", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_refresh_too_early() {
        let state = jwt_state();
        let issued = state
            .tokens()
            .unwrap()
            .issue("admin", Duration::minutes(10), Utc::now())
            .unwrap();

        let response = app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .header("Authorization", issued.token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Token is not expired yet");
    }

    #[tokio::test]
    async fn test_refresh_near_expiry() {
        let state = jwt_state();
        let issued = state
            .tokens()
            .unwrap()
            .issue("admin", Duration::seconds(10), Utc::now())
            .unwrap();

        let response = app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .header("Authorization", format!("Bearer {}", issued.token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_refresh_invalid_token() {
        let response = app(jwt_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .header("Authorization", "garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
