/**
 * User Model and Credential Store Operations
 *
 * This module defines the `User` row type and the two store operations
 * the authentication core needs: insert on signup and lookup on login.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User record as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID), immutable once created
    pub id: uuid::Uuid,
    /// Email address (unique, matched case-sensitively)
    pub email: String,
    /// Bcrypt password hash; the plaintext is never stored
    pub password_hash: String,
    /// Active flag, set on signup
    pub is_active: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user.
///
/// The `email` column carries a UNIQUE constraint, so a duplicate insert
/// fails at the database even when two signups race; callers map that
/// violation to a conflict error.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Bcrypt hash of the user's password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, password_hash, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(true)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email (exact, case-sensitive match).
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn find_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, is_active, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
