use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use recipebox_auth::{auth_routes, require_authorization, API_KEY_HEADER};

use crate::{
    handlers::{
        health::{healthz, livez},
        recipes::{create_recipe, delete_recipe, list_recipes, search_recipes, update_recipe},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(API_KEY_HEADER),
        ]);

    // Write methods go through the configured authorizer
    let recipe_routes = Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/search", get(search_recipes))
        .route("/recipes/{id}", put(update_recipe).delete(delete_recipe))
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_authorization,
        ));

    let mut app: Router = Router::new()
        .merge(recipe_routes)
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .with_state(state.clone());

    if state.auth.issues_tokens() {
        app = app.merge(auth_routes().with_state(state.auth.clone()));
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
}
