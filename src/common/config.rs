// Application configuration loaded once at startup

use anyhow::Context;
use std::env;

/// Configuration resolved from the environment at startup.
///
/// Components receive the values they need from here; nothing reads the
/// environment after `from_env` returns.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_client_id: String,
    pub github_client_secret: String,
    pub jwt_secret: String,
    pub database_url: String,
    pub port: u16,
    pub token_ttl_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET` and `JWT_SECRET` are
    /// required; the rest have defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            github_client_id: env::var("GITHUB_CLIENT_ID")
                .context("GITHUB_CLIENT_ID must be set")?,
            github_client_secret: env::var("GITHUB_CLIENT_SECRET")
                .context("GITHUB_CLIENT_SECRET must be set")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://auth_api.db".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3000),
            token_ttl_hours: env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(24),
        })
    }
}
