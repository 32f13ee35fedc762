// Application state shared across all modules

use std::sync::Arc;

use crate::common::Config;
use crate::services::{GithubService, SessionService};
use crate::users::UserStore;

/// Application state containing the user store, services, and configuration.
/// The database pool lives inside the store; nothing else touches it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<UserStore>,
    pub github_service: Arc<GithubService>,
    pub session_service: Arc<SessionService>,
}
