//! User data models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// User database model
///
/// `profile` is the raw JSON text as stored; use [`User::profile_value`]
/// when the parsed document is needed.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub profile: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl User {
    /// Parse the stored profile document. Unparseable or absent profiles
    /// come back as JSON null rather than failing the request.
    pub fn profile_value(&self) -> Value {
        self.profile
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or(Value::Null)
    }

    /// JSON representation returned to clients.
    pub fn to_response(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "username": self.username,
            "profile": self.profile_value(),
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}
