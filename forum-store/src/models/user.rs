/// User model
///
/// # Schema
///
/// ```sql
/// -- PostgreSQL
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY,
///     name VARCHAR(100) UNIQUE NOT NULL,
///     password VARCHAR(100) NOT NULL
/// );
///
/// -- SQLite
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT UNIQUE NOT NULL,
///     password TEXT NOT NULL
/// );
/// ```
///
/// Passwords are stored as plaintext. That is inherited behavior this
/// service deliberately does not change; see the project non-goals.

use serde::{Deserialize, Serialize};

/// A registered forum account
///
/// Users are created via registration only and never updated or deleted.
/// The `password` field is serialized on the user-listing endpoint, which
/// exposes it to callers; that exposure is a documented part of the API
/// surface, not an accident.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Generated user ID
    pub id: i64,

    /// Display name, unique across all users
    pub name: String,

    /// Plaintext password
    pub password: String,
}

/// Input for registering a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name (must not collide with an existing user)
    pub name: String,

    /// Plaintext password
    pub password: String,
}
