// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod id_generator;
pub mod migrations;
pub mod state;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::ApiError;
pub use id_generator::generate_user_id;
pub use state::AppState;
