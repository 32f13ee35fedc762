//! # Auth Module
//!
//! This module handles the authentication surface:
//! - GitHub OAuth callback (code exchange, profile fetch, user upsert)
//! - Session token issuance and verification
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod routes;


pub use extractors::AuthedUser;
pub use routes::auth_routes;
