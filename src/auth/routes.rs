//! Authentication routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /` - Landing page with the provider client id embedded
/// - `GET /api/auth` - Verify a session token and return the user record
/// - `GET /callback` - GitHub OAuth callback
pub fn auth_routes() -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/auth", get(handlers::auth_check))
        .route("/callback", get(handlers::callback))
}
