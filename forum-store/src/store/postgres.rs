/// PostgreSQL arm of the store
///
/// Placeholders are `$n`, generated ids come back via `RETURNING id`, and
/// generated-id columns are `BIGSERIAL` so ids surface as `i64` like the
/// embedded dialect. The foreign key on `posts.author_id` is enforced here,
/// unlike on SQLite.

use crate::models::{NewPost, NewUser, PostRow, User};
use chrono::NaiveDateTime;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{SEED_POST_AUTHOR_ID, SEED_POST_CONTENT, SEED_POST_TITLE};

pub(super) async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) UNIQUE NOT NULL,
            password VARCHAR(100) NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author_id BIGINT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (author_id) REFERENCES users (id)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Tables are committed before seeding so a seed failure cannot undo
    // the DDL.
    tx.commit().await?;

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if user_count == 0 {
        sqlx::query("INSERT INTO posts (title, content, author_id) VALUES ($1, $2, $3)")
            .bind(SEED_POST_TITLE)
            .bind(SEED_POST_CONTENT)
            .bind(SEED_POST_AUTHOR_ID)
            .execute(pool)
            .await?;
    }

    Ok(())
}

pub(super) async fn find_user_by_name(pool: &PgPool, name: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, password FROM users WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub(super) async fn insert_user(pool: &PgPool, user: NewUser) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, password) VALUES ($1, $2) RETURNING id",
    )
    .bind(user.name)
    .bind(user.password)
    .fetch_one(pool)
    .await
}

pub(super) async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
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

pub(super) async fn insert_post(pool: &PgPool, post: NewPost) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO posts (title, content, author_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(post.title)
    .bind(post.content)
    .bind(post.author_id)
    .fetch_one(pool)
    .await
}

pub(super) async fn list_posts(pool: &PgPool) -> Result<Vec<PostRow>, sqlx::Error> {
    let query = format!("{POST_SELECT} ORDER BY posts.created_at DESC");
    let rows = sqlx::query(&query).fetch_all(pool).await?;
    rows.into_iter().map(post_from_row).collect()
}

pub(super) async fn find_post(pool: &PgPool, id: i64) -> Result<Option<PostRow>, sqlx::Error> {
    let query = format!("{POST_SELECT} WHERE posts.id = $1");
    let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;
    row.map(post_from_row).transpose()
}

/// Maps a joined post row, rendering the native timestamp as
/// `YYYY-MM-DD HH:MM:SS` to match what the embedded dialect stores
fn post_from_row(row: PgRow) -> Result<PostRow, sqlx::Error> {
    let created_at: Option<NaiveDateTime> = row.try_get("created_at")?;

    Ok(PostRow {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author_id: row.try_get("author_id")?,
        author_name: row.try_get("author_name")?,
        created_at: created_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
    })
}
