/// SQLite arm of the store
///
/// Placeholders are `?`, generated ids come back from the connection's
/// `last_insert_rowid()`, and `CURRENT_TIMESTAMP` defaults are stored as
/// `YYYY-MM-DD HH:MM:SS` text. The declared foreign key on
/// `posts.author_id` is not enforced: `PRAGMA foreign_keys` stays off, so
/// orphan posts are accepted and only hidden by the listing join.

use crate::models::{NewPost, NewUser, PostRow, User};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{SEED_POST_AUTHOR_ID, SEED_POST_CONTENT, SEED_POST_TITLE};

pub(super) async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author_id INTEGER NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (author_id) REFERENCES users (id)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if user_count == 0 {
        sqlx::query("INSERT INTO posts (title, content, author_id) VALUES (?, ?, ?)")
            .bind(SEED_POST_TITLE)
            .bind(SEED_POST_CONTENT)
            .bind(SEED_POST_AUTHOR_ID)
            .execute(pool)
            .await?;
    }

    Ok(())
}

pub(super) async fn find_user_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, password FROM users WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub(super) async fn insert_user(pool: &SqlitePool, user: NewUser) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO users (name, password) VALUES (?, ?)")
        .bind(user.name)
        .bind(user.password)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

pub(super) async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, password FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

const POST_SELECT: &str = r#"
    SELECT
        posts.id,
        posts.title,
        posts.content,
        posts.author_id,
        users.name AS author_name,
        posts.created_at
    FROM posts
    JOIN users ON posts.author_id = users.id
"#;

pub(super) async fn insert_post(pool: &SqlitePool, post: NewPost) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO posts (title, content, author_id) VALUES (?, ?, ?)")
        .bind(post.title)
        .bind(post.content)
        .bind(post.author_id)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

pub(super) async fn list_posts(pool: &SqlitePool) -> Result<Vec<PostRow>, sqlx::Error> {
    let query = format!("{POST_SELECT} ORDER BY posts.created_at DESC");
    let rows = sqlx::query(&query).fetch_all(pool).await?;
    rows.into_iter().map(post_from_row).collect()
}

pub(super) async fn find_post(pool: &SqlitePool, id: i64) -> Result<Option<PostRow>, sqlx::Error> {
    let query = format!("{POST_SELECT} WHERE posts.id = ?");
    let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;
    row.map(post_from_row).transpose()
}

fn post_from_row(row: SqliteRow) -> Result<PostRow, sqlx::Error> {
    // CURRENT_TIMESTAMP defaults land as text; NULL only if a row was
    // written with an explicit NULL.
    let created_at: Option<String> = row.try_get("created_at")?;

    Ok(PostRow {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author_id: row.try_get("author_id")?,
        author_name: row.try_get("author_name")?,
        created_at: created_at.unwrap_or_default(),
    })
}
