//! Authentication handlers

use axum::{
    extract::{Extension, Query},
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::extractors::AuthedUser;
use crate::common::{ApiError, AppState};

/// Query parameters for the OAuth callback
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// GET /
/// Landing page with the GitHub client id embedded for the login link.
pub async fn home(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Html<String> {
    let state = state_lock.read().await;

    Html(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Sign in with GitHub</title>
  </head>
  <body>
    <h1>Sign in with GitHub</h1>
    <a href="https://github.com/login/oauth/authorize?client_id={client_id}">Login</a>
    <pre id="user"></pre>
    <script>
      const token = window.localStorage.getItem('token');
      if (token) {{
        fetch('/api/auth', {{ headers: {{ authorization: token }} }})
          .then((res) => res.json())
          .then((user) => {{
            document.getElementById('user').textContent = JSON.stringify(user, null, 2);
          }});
      }}
    </script>
  </body>
</html>
"#,
        client_id = state.config.github_client_id
    ))
}

/// GET /api/auth
/// Returns the authenticated user's record. The extractor has already
/// verified the token and loaded the user.
pub async fn auth_check(authed: AuthedUser) -> Result<Json<Value>, ApiError> {
    debug!(user_id = %authed.user.id, username = %authed.user.username, "Returning user record");

    Ok(Json(authed.user.to_response()))
}

/// GET /callback?code=...
/// OAuth callback: exchange the code, fetch the profile, upsert the user,
/// sign a session token, and hand the token to the browser.
pub async fn callback(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<CallbackParams>,
) -> Result<Html<String>, ApiError> {
    let state = state_lock.read().await.clone();

    let code = params
        .code
        .ok_or_else(|| ApiError::BadRequest("missing authorization code".to_string()))?;

    info!("Received OAuth callback with authorization code");

    let access_token = state.github_service.exchange_code(&code).await?;
    let profile = state.github_service.fetch_profile(&access_token).await?;

    let (login, rest) = split_login(profile).ok_or_else(|| {
        ApiError::InternalServer("provider profile missing login field".to_string())
    })?;

    debug!(username = %login, "Fetched GitHub profile, upserting user");

    let user = state
        .users
        .upsert(&login, &rest)
        .await
        .map_err(ApiError::DatabaseError)?;

    let token = state.session_service.sign(&user.id)?;

    info!(user_id = %user.id, username = %user.username, "User authenticated via GitHub OAuth");

    Ok(Html(callback_page(&token)))
}

// ---- Helper Functions ----

/// Split the provider profile into the login name and the remaining
/// attributes. The login becomes the username; the rest is stored verbatim.
pub(crate) fn split_login(profile: Value) -> Option<(String, Value)> {
    let mut map = match profile {
        Value::Object(map) => map,
        _ => return None,
    };

    let login = map.remove("login")?.as_str()?.to_string();
    Some((login, Value::Object(map)))
}

/// Small HTML payload that stores the session token in localStorage and
/// bounces back to the landing page.
pub(crate) fn callback_page(token: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <script>
      window.localStorage.setItem('token', '{token}');
      window.document.location = '/';
    </script>
  </head>
</html>
"#
    )
}
