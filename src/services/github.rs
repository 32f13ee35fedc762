// src/services/github.rs
//! GitHub OAuth client
//!
//! Two outbound calls: exchange an authorization code for an access token,
//! then fetch the authenticated user's profile with that token. No retries;
//! transport failures propagate to the caller.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const PROFILE_URL: &str = "https://api.github.com/user";

#[derive(Debug, Error)]
pub enum GithubError {
    /// GitHub reported an error in the exchange response body
    /// (bad or expired authorization code, mismatched client credentials).
    #[error("OAuth flow failed: {0}")]
    OAuthFailed(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone)]
pub struct GithubService {
    client_id: String,
    client_secret: String,
    client: Client,
    token_url: String,
    profile_url: String,
}

impl GithubService {
    pub fn new(client_id: String, client_secret: String, client: Client) -> Self {
        Self {
            client_id,
            client_secret,
            client,
            token_url: TOKEN_URL.to_string(),
            profile_url: PROFILE_URL.to_string(),
        }
    }

    /// Point the client at alternate endpoints, e.g. a GitHub Enterprise
    /// host or a local stub in tests.
    pub fn with_endpoints(
        mut self,
        token_url: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        self.token_url = token_url.into();
        self.profile_url = profile_url.into();
        self
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<String, GithubError> {
        debug!("Exchanging authorization code for access token");

        let payload = serde_json::json!({
            "code": code,
            "client_id": self.client_id,
            "client_secret": self.client_secret,
        });

        let response = self
            .client
            .post(&self.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.token_url, "HTTP error during token exchange");
                GithubError::RequestFailed(e.to_string())
            })?;

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| GithubError::MalformedResponse(e.to_string()))?;

        parse_token_response(&body)
    }

    /// Fetch the authenticated user's profile using an access token.
    ///
    /// Returns the raw profile document; the caller decides which fields
    /// matter.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<Value, GithubError> {
        debug!("Fetching user profile from GitHub");

        let response = self
            .client
            .get(&self.profile_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("token {}", access_token),
            )
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.profile_url, "HTTP error fetching profile");
                GithubError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(http_status = %status, "GitHub profile fetch returned error status");
            return Err(GithubError::OAuthFailed(format!(
                "profile fetch rejected with HTTP {}",
                status
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GithubError::MalformedResponse(e.to_string()))
    }
}

/// Pull the access token out of an exchange response body.
///
/// GitHub answers 200 even for rejected codes and signals failure through an
/// `error` field, so the body has to be inspected either way.
fn parse_token_response(body: &Value) -> Result<String, GithubError> {
    if let Some(err) = body.get("error").and_then(|v| v.as_str()) {
        warn!(oauth_error = %err, "GitHub reported an error during token exchange");
        return Err(GithubError::OAuthFailed(err.to_string()));
    }

    body.get("access_token")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| GithubError::MalformedResponse("missing access_token".to_string()))
}
