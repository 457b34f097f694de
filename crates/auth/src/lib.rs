//! Request authorization for recipebox.
//!
//! This crate provides:
//! - Authorizers for the three auth modes (open, static API key, JWT)
//! - HS256 token issuing and refresh
//! - An axum middleware guarding write routes
//! - The `/signin` and `/refresh` routes

mod authorizer;
mod config;
mod error;
mod handlers;
mod middleware;
mod state;
mod token;

pub use authorizer::{AllowAll, ApiKeyAuthorizer, Authorizer, JwtAuthorizer, API_KEY_HEADER};
pub use config::{AuthConfig, AuthMode};
pub use error::AuthError;
pub use handlers::auth_routes;
pub use middleware::{is_protected_method, require_authorization};
pub use state::AuthState;
pub use token::{Claims, IssuedToken, TokenIssuer};
