//! User persistence operations

use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::models::User;
use crate::common::generate_user_id;

/// Data access for the `users` table.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a new user with a generated id.
    ///
    /// Fails with a unique-constraint violation if the username is taken.
    pub async fn create(&self, username: &str, profile: &Value) -> Result<User, sqlx::Error> {
        let id = generate_user_id();
        info!(user_id = %id, username = %username, "Creating new user");

        sqlx::query("INSERT INTO users (id, username, profile) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(username)
            .bind(profile.to_string())
            .execute(&self.pool)
            .await?;

        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&id)
            .fetch_one(&self.pool)
            .await
    }

    /// Replace a user's profile document. Full replace, never a merge.
    pub async fn update(&self, user: &User, profile: &Value) -> Result<User, sqlx::Error> {
        debug!(user_id = %user.id, "Replacing user profile");

        sqlx::query("UPDATE users SET profile = ?, updated_at = datetime('now') WHERE id = ?")
            .bind(profile.to_string())
            .bind(&user.id)
            .execute(&self.pool)
            .await?;

        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&user.id)
            .fetch_one(&self.pool)
            .await
    }

    /// Create the user if the username is new, otherwise replace the stored
    /// profile. A single statement, so two concurrent first-time logins for
    /// the same username cannot both insert.
    pub async fn upsert(&self, username: &str, profile: &Value) -> Result<User, sqlx::Error> {
        let id = generate_user_id();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, profile)
            VALUES (?, ?, ?)
            ON CONFLICT(username) DO UPDATE SET
                profile = excluded.profile,
                updated_at = datetime('now')
            "#,
        )
        .bind(&id)
        .bind(username)
        .bind(profile.to_string())
        .execute(&self.pool)
        .await?;

        // The generated id only sticks on insert; fetch by username to get
        // the row that actually won.
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
    }
}
