/// Post endpoints
///
/// # Endpoints
///
/// - `POST /app/posts` - Create a post
/// - `GET /app/posts` - List posts, newest first, with content previews
/// - `GET /app/posts/:id` - Get one post with full content

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use forum_store::models::{NewPost, PostRow};
use forum_store::time::to_display_time;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

/// Preview length in characters (not bytes)
const PREVIEW_CHARS: usize = 100;

/// Create-post response
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    /// Always true on this path
    pub success: bool,

    /// Stable user-facing message
    pub message: String,

    /// Generated id of the new post
    pub post_id: i64,
}

/// One entry in the post listing
#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,

    /// First 100 characters of the content, with a trailing ellipsis when
    /// the content is longer
    pub content_preview: String,

    /// The full content, returned alongside the preview
    pub content: String,

    pub author_id: i64,
    pub author_name: String,

    /// Creation time shifted to the display offset
    pub created_at: String,
}

/// Post listing response
#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub success: bool,
    pub data: Vec<PostSummary>,

    /// Number of entries in `data`
    pub count: usize,
}

/// A single post, untruncated
#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
    pub created_at: String,
}

/// Single-post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub success: bool,
    pub data: PostDetail,
}

impl PostSummary {
    fn from_row(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content_preview: content_preview(&row.content),
            content: row.content,
            author_id: row.author_id,
            author_name: row.author_name,
            created_at: to_display_time(&row.created_at),
        }
    }
}

impl PostDetail {
    fn from_row(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
            author_name: row.author_name,
            created_at: to_display_time(&row.created_at),
        }
    }
}

/// Truncates content to the first [`PREVIEW_CHARS`] characters
///
/// Counts characters rather than bytes so multibyte content never splits.
fn content_preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    } else {
        content.to_string()
    }
}

/// Create a post
///
/// No validation at all: a missing or mistyped field maps straight to
/// the generic 500, and `author_id` is never checked against the users
/// table.
///
/// # Endpoint
///
/// ```text
/// POST /app/posts
/// Content-Type: application/json
///
/// { "title": "...", "content": "...", "author_id": 1 }
/// ```
pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreatePostResponse>)> {
    let failed = || ApiError::Internal("failed to publish post".to_string());

    let title = body.get("title").and_then(Value::as_str).ok_or_else(failed)?;
    let content = body
        .get("content")
        .and_then(Value::as_str)
        .ok_or_else(failed)?;
    let author_id = body
        .get("author_id")
        .and_then(Value::as_i64)
        .ok_or_else(failed)?;

    let post_id = state
        .store
        .insert_post(NewPost {
            title: title.to_string(),
            content: content.to_string(),
            author_id,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "post insert failed");
            ApiError::Internal("failed to publish post".to_string())
        })?;

    info!(post_id, author_id, "post published");

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            success: true,
            message: "post published".to_string(),
            post_id,
        }),
    ))
}

/// List posts, newest first
///
/// Posts are inner-joined to users, so entries whose author does not exist
/// are silently absent. Each entry carries both the preview and the full
/// content, with `created_at` shifted to display time.
///
/// # Endpoint
///
/// ```text
/// GET /app/posts
/// ```
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<PostsResponse>> {
    let rows = state.store.list_posts().await?;

    let data: Vec<PostSummary> = rows.into_iter().map(PostSummary::from_row).collect();
    let count = data.len();

    Ok(Json(PostsResponse {
        success: true,
        data,
        count,
    }))
}

/// Get a single post
///
/// Same join and time handling as the listing, but the content comes back
/// untruncated.
///
/// # Endpoint
///
/// ```text
/// GET /app/posts/:id
/// ```
///
/// # Errors
///
/// - `404`: no post with that id (or its author is gone, inner join)
/// - `500`: store failure, raw error surfaced
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PostResponse>> {
    let row = state
        .store
        .find_post(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("post not found".to_string()))?;

    Ok(Json(PostResponse {
        success: true,
        data: PostDetail::from_row(row),
    }))
}
