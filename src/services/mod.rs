// Services module - outbound integrations and token handling

pub mod github;
pub mod session;

pub use github::GithubService;
pub use session::SessionService;
