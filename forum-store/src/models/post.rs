/// Post model
///
/// # Schema
///
/// ```sql
/// -- PostgreSQL
/// CREATE TABLE posts (
///     id BIGSERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     content TEXT NOT NULL,
///     author_id BIGINT NOT NULL,
///     created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
///     FOREIGN KEY (author_id) REFERENCES users (id)
/// );
/// ```
///
/// The SQLite DDL declares the same foreign key but SQLite only enforces it
/// when `PRAGMA foreign_keys` is enabled per connection, which this service
/// does not do. The embedded store therefore accepts posts whose author does
/// not exist; the listing join hides them.

use serde::{Deserialize, Serialize};

/// A post row as read back from the store, joined to its author
///
/// `created_at` is the raw store value rendered as `YYYY-MM-DD HH:MM:SS`;
/// display-offset conversion happens in the HTTP layer via
/// [`crate::time::to_display_time`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRow {
    /// Generated post ID
    pub id: i64,

    /// Post title
    pub title: String,

    /// Full post body
    pub content: String,

    /// ID of the authoring user
    pub author_id: i64,

    /// Display name of the authoring user
    pub author_name: String,

    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

/// Input for creating a new post
///
/// No field is validated against the users table; `author_id` is trusted
/// as-is and referential integrity is left to the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title
    pub title: String,

    /// Full post body
    pub content: String,

    /// ID of the authoring user
    pub author_id: i64,
}
