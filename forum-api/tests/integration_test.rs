/// Integration tests for the forum API
///
/// Drives the full router against an in-memory SQLite store:
/// registration and its failure modes, post lifecycle, previews,
/// display-time shifting, ordering, and error shapes.

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_created_with_user_id() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .post_json("/app/register", json!({ "name": "alice", "password": "pw" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["user_id"], 1);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let ctx = TestContext::new().await.unwrap();

    common::register_user(&ctx, "alice", "pw").await;
    let (status, body) = ctx
        .post_json("/app/register", json!({ "name": "alice", "password": "other" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "username already exists");

    // Exactly one row persists for that name.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE name = 'alice'")
        .fetch_one(ctx.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_register_missing_password_is_validation_error() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .post_json("/app/register", json!({ "name": "bob" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "name and password are required");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(ctx.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_list_users_exposes_password() {
    let ctx = TestContext::new().await.unwrap();

    common::register_user(&ctx, "alice", "hunter2").await;
    common::register_user(&ctx, "bob", "pw2").await;

    let (status, body) = ctx.get("/app/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    // Ascending id order, password included as-is.
    assert_eq!(data[0]["name"], "alice");
    assert_eq!(data[0]["password"], "hunter2");
    assert_eq!(data[1]["id"], 2);
}

#[tokio::test]
async fn test_fresh_store_has_empty_users_and_one_seed_post() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.get("/app/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (seed_count, author_id): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), MAX(author_id) FROM posts")
            .fetch_one(ctx.pool())
            .await
            .unwrap();
    assert_eq!(seed_count, 1);
    assert_eq!(author_id, 1);
}

#[tokio::test]
async fn test_created_post_appears_once_in_listing() {
    let ctx = TestContext::new().await.unwrap();

    // User id 1 also adopts the seed post.
    common::register_user(&ctx, "alice", "pw").await;
    let post_id = common::create_post(&ctx, "hello", "short body", 1).await;

    let (status, body) = ctx.get("/app/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], body["data"].as_array().unwrap().len());

    let matches: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["id"] == post_id)
        .collect();
    assert_eq!(matches.len(), 1);

    // Short content: preview equals content, no ellipsis.
    assert_eq!(matches[0]["content_preview"], "short body");
    assert_eq!(matches[0]["content"], "short body");
    assert_eq!(matches[0]["author_name"], "alice");
}

#[tokio::test]
async fn test_long_content_previewed_but_returned_in_full() {
    let ctx = TestContext::new().await.unwrap();

    common::register_user(&ctx, "alice", "pw").await;
    let content = "x".repeat(250);
    let post_id = common::create_post(&ctx, "long", &content, 1).await;

    let (_, body) = ctx.get("/app/posts").await;
    let entry = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == post_id)
        .unwrap();

    let expected_preview = format!("{}...", "x".repeat(100));
    assert_eq!(entry["content_preview"], expected_preview.as_str());
    assert_eq!(entry["content"], content.as_str());

    // Single-post view never truncates.
    let (status, body) = ctx.get(&format!("/app/posts/{post_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["content"], content.as_str());
}

#[tokio::test]
async fn test_get_missing_post_is_not_found() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.get("/app/posts/12345").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "post not found");
}

#[tokio::test]
async fn test_create_post_without_required_field_is_generic_failure() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .post_json("/app/posts", json!({ "title": "no content here" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "failed to publish post");
}

#[tokio::test]
async fn test_created_at_shifted_by_eight_hours() {
    let ctx = TestContext::new().await.unwrap();

    common::register_user(&ctx, "alice", "pw").await;
    let post_id = common::create_post(&ctx, "t", "body", 1).await;

    sqlx::query("UPDATE posts SET created_at = '2024-01-01 00:00:00' WHERE id = ?")
        .bind(post_id)
        .execute(ctx.pool())
        .await
        .unwrap();

    let (_, body) = ctx.get(&format!("/app/posts/{post_id}")).await;
    assert_eq!(body["data"]["created_at"], "2024-01-01 08:00:00");

    let (_, body) = ctx.get("/app/posts").await;
    let entry = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == post_id)
        .unwrap();
    assert_eq!(entry["created_at"], "2024-01-01 08:00:00");
}

#[tokio::test]
async fn test_listing_orders_by_created_at_descending() {
    let ctx = TestContext::new().await.unwrap();

    common::register_user(&ctx, "alice", "pw").await;
    let older = common::create_post(&ctx, "older", "a", 1).await;
    let newer = common::create_post(&ctx, "newer", "b", 1).await;

    sqlx::query("UPDATE posts SET created_at = '2024-01-01 00:00:00' WHERE id = ?")
        .bind(older)
        .execute(ctx.pool())
        .await
        .unwrap();
    sqlx::query("UPDATE posts SET created_at = '2024-02-01 00:00:00' WHERE id = ?")
        .bind(newer)
        .execute(ctx.pool())
        .await
        .unwrap();

    let (_, body) = ctx.get("/app/posts").await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .filter(|id| *id == older || *id == newer)
        .collect();
    assert_eq!(ids, vec![newer, older]);
}

#[tokio::test]
async fn test_health_check_is_static_ok() {
    let ctx = TestContext::new().await.unwrap();

    // Break the store entirely; health must not care.
    sqlx::query("DROP TABLE posts").execute(ctx.pool()).await.unwrap();
    sqlx::query("DROP TABLE users").execute(ctx.pool()).await.unwrap();

    let (status, body) = ctx.get("/app/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_read_failure_surfaces_raw_error() {
    let ctx = TestContext::new().await.unwrap();

    sqlx::query("DROP TABLE posts").execute(ctx.pool()).await.unwrap();

    let (status, body) = ctx.get("/app/posts").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    // Read paths leak the underlying error string under "error".
    assert!(body["error"].as_str().unwrap().contains("posts"));
    assert!(body.get("message").is_none());
}
