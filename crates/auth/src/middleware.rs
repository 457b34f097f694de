use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AuthError;
use crate::state::AuthState;

/// Returns true for methods that modify the collection.
pub fn is_protected_method(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH | Method::DELETE)
}

/// Rejects write requests the configured authorizer does not accept.
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_authorization(
    State(auth): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    if is_protected_method(request.method()) && !auth.authorizer.is_authorized(request.headers()) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            mode = auth.config.mode.as_str(),
            "Unauthorized request"
        );
        return AuthError::Unauthorized.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, AuthMode};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn api_key_app() -> Router {
        let auth = AuthState::new(AuthConfig {
            mode: AuthMode::ApiKey,
            api_key: Some("secret".to_string()),
            ..Default::default()
        })
        .unwrap();

        Router::new()
            .route("/things", get(|| async { "list" }).post(|| async { "created" }))
            .route_layer(from_fn_with_state(auth, require_authorization))
    }

    #[test]
    fn test_protected_methods() {
        assert!(is_protected_method(&Method::POST));
        assert!(is_protected_method(&Method::PUT));
        assert!(is_protected_method(&Method::DELETE));
        assert!(!is_protected_method(&Method::GET));
        assert!(!is_protected_method(&Method::OPTIONS));
    }

    #[tokio::test]
    async fn test_reads_pass_without_key() {
        let response = api_key_app()
            .oneshot(Request::builder().uri("/things").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_write_without_key_is_rejected() {
        let response = api_key_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/things")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_write_with_key_passes() {
        let response = api_key_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/things")
                    .header("X-API-KEY", "secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
