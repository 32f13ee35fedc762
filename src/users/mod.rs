//! # Users Module
//!
//! Persisted user records keyed by a generated id, one row per provider
//! login name. The profile column holds the provider profile as a JSON
//! document and is replaced wholesale on every login.

pub mod models;
pub mod store;


pub use models::User;
pub use store::UserStore;
