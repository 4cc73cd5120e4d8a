/// Dual-backend store handle
///
/// This module resolves which SQL backend to use, once, at startup:
/// PostgreSQL when a usable connection string is configured, otherwise an
/// embedded SQLite file. Every query the forum issues goes through [`Store`],
/// and the dialect-specific SQL (placeholder style, generated-id retrieval,
/// DDL) lives in the per-backend submodules. Callers never see the dialect.
///
/// # Example
///
/// ```no_run
/// use forum_store::store::Store;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let store = Store::connect(Some("postgresql://localhost/forum"), "database.db").await?;
/// store.init_schema().await;
/// let users = store.list_users().await?;
/// # Ok(())
/// # }
/// ```

mod postgres;
mod sqlite;

use crate::models::{NewPost, NewUser, PostRow, User};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use std::time::Duration;
use tracing::{info, warn};

/// Title of the post seeded into an empty store
pub const SEED_POST_TITLE: &str = "Welcome to the forum!";

/// Body of the seed post
///
/// Longer than 100 characters so the listing preview is truncated for it.
pub const SEED_POST_CONTENT: &str = "Welcome! This is the first post on this forum.\n\
Feel free to register an account, introduce yourself, and start a thread of your own.\n\
If you run into problems or have suggestions, please open a post and let us know.\n\
Happy posting!";

/// Author id recorded on the seed post
///
/// The seed is inserted before any user exists, so this id may reference
/// nobody. The embedded store does not enforce the foreign key and the
/// listing join simply hides the post until user 1 registers.
pub const SEED_POST_AUTHOR_ID: i64 = 1;

/// An open connection to whichever backend was resolved at startup
///
/// Constructed once in `main` and shared through application state. The
/// SQLite pool is capped at a single connection so writes against the file
/// are serialized.
#[derive(Debug, Clone)]
pub enum Store {
    /// Managed PostgreSQL server
    Postgres(PgPool),

    /// Embedded SQLite file
    Sqlite(SqlitePool),
}

impl Store {
    /// Resolves and opens the backend for the given connection descriptor
    ///
    /// Backend choice is a pure function of the descriptor plus one
    /// connection attempt, decided exactly once here:
    ///
    /// - no descriptor: embedded store
    /// - descriptor is an unresolved `{{...}}` deploy-platform placeholder:
    ///   embedded store
    /// - PostgreSQL connection attempt fails: embedded store
    /// - otherwise: PostgreSQL
    ///
    /// The embedded store creates its file on first use and never needs
    /// network access.
    ///
    /// # Errors
    ///
    /// Returns an error only if the SQLite fallback itself cannot be opened.
    pub async fn connect(database_url: Option<&str>, sqlite_path: &str) -> Result<Self, sqlx::Error> {
        if let Some(url) = database_url {
            if url.starts_with("{{") && url.ends_with("}}") {
                warn!(
                    descriptor = url,
                    "DATABASE_URL is an unresolved platform placeholder, using embedded store"
                );
            } else {
                match PgPoolOptions::new()
                    .max_connections(10)
                    .acquire_timeout(Duration::from_secs(30))
                    .connect(url)
                    .await
                {
                    Ok(pool) => {
                        info!("connected to PostgreSQL");
                        return Ok(Store::Postgres(pool));
                    }
                    Err(e) => {
                        warn!(error = %e, "PostgreSQL connection failed, falling back to embedded store");
                    }
                }
            }
        } else {
            info!("no DATABASE_URL configured, using embedded store");
        }

        Self::connect_sqlite(sqlite_path).await
    }

    /// Opens the embedded SQLite store at `path`, creating the file if absent
    ///
    /// Also used directly by tests with `:memory:`.
    pub async fn connect_sqlite(path: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            // sqlx turns `PRAGMA foreign_keys` on by default; this store
            // documents the declared foreign key as unenforced.
            .foreign_keys(false);

        // Single connection: serializes writes against the file and keeps
        // an in-memory database alive across statements.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!(path, "connected to SQLite");
        Ok(Store::Sqlite(pool))
    }

    /// Returns the dialect tag for diagnostics
    pub fn dialect(&self) -> &'static str {
        match self {
            Store::Postgres(_) => "postgres",
            Store::Sqlite(_) => "sqlite",
        }
    }

    /// Idempotently creates the `users` and `posts` tables and seeds one
    /// demo post when the `users` table is empty
    ///
    /// Any failure is logged and swallowed; the in-flight transaction rolls
    /// back on drop and startup continues with whatever schema exists.
    pub async fn init_schema(&self) {
        let result = match self {
            Store::Postgres(pool) => postgres::init_schema(pool).await,
            Store::Sqlite(pool) => sqlite::init_schema(pool).await,
        };

        match result {
            Ok(()) => info!(dialect = self.dialect(), "schema initialized"),
            Err(e) => warn!(error = %e, "schema initialization failed, continuing startup"),
        }
    }

    /// Looks up a user by display name
    pub async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::find_user_by_name(pool, name).await,
            Store::Sqlite(pool) => sqlite::find_user_by_name(pool, name).await,
        }
    }

    /// Inserts a user and returns the generated id
    ///
    /// PostgreSQL retrieves the id with `RETURNING id`; SQLite with the
    /// connection's `last_insert_rowid()`.
    pub async fn insert_user(&self, user: NewUser) -> Result<i64, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::insert_user(pool, user).await,
            Store::Sqlite(pool) => sqlite::insert_user(pool, user).await,
        }
    }

    /// Returns all users ordered by ascending id
    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::list_users(pool).await,
            Store::Sqlite(pool) => sqlite::list_users(pool).await,
        }
    }

    /// Inserts a post and returns the generated id
    ///
    /// `author_id` is not checked against the users table.
    pub async fn insert_post(&self, post: NewPost) -> Result<i64, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::insert_post(pool, post).await,
            Store::Sqlite(pool) => sqlite::insert_post(pool, post).await,
        }
    }

    /// Returns all posts joined to their author, newest first
    ///
    /// Inner join: posts whose author id matches no user are excluded.
    pub async fn list_posts(&self) -> Result<Vec<PostRow>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::list_posts(pool).await,
            Store::Sqlite(pool) => sqlite::list_posts(pool).await,
        }
    }

    /// Returns a single post joined to its author, if it exists
    pub async fn find_post(&self, id: i64) -> Result<Option<PostRow>, sqlx::Error> {
        match self {
            Store::Postgres(pool) => postgres::find_post(pool, id).await,
            Store::Sqlite(pool) => sqlite::find_post(pool, id).await,
        }
    }
}
