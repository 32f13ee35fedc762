//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::common::{ApiError, AppState};
use crate::users::User;

/// Authenticated user extractor
///
/// Validates the session token from the `Authorization` header and confirms
/// the embedded user id still exists. A valid signature over a deleted or
/// unknown id is rejected the same as a bad token. Carries the loaded
/// record so handlers do not look it up again.
#[derive(Debug)]
pub struct AuthedUser {
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = token.strip_prefix("Bearer ").unwrap_or(&token);

        let user_id = app_state
            .session_service
            .verify(bare_token)
            .map_err(|_| ApiError::Unauthorized("invalid token".into()))?;

        let user = app_state.users.find_by_id(&user_id).await.map_err(|e| {
            error!(
                error = %e,
                user_id = %user_id,
                "Database error during user lookup in authentication"
            );
            ApiError::DatabaseError(e)
        })?;

        match user {
            Some(u) => {
                debug!(
                    user_id = %u.id,
                    username = %u.username,
                    "User authentication successful via extractor"
                );
                Ok(AuthedUser { user: u })
            }
            None => {
                warn!(user_id = %user_id, "Authentication failed: user not found in database");
                Err(ApiError::Unauthorized("user not found".into()))
            }
        }
    }
}
