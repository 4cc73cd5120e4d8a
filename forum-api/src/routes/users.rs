/// User endpoints
///
/// # Endpoints
///
/// - `POST /app/register` - Register a new user
/// - `GET /app/users` - List all users

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use forum_store::models::{NewUser, User};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Always true on this path
    pub success: bool,

    /// Stable user-facing message
    pub message: String,

    /// Generated id of the new user
    pub user_id: i64,
}

/// User listing response
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// Always true on this path
    pub success: bool,

    /// All users, ascending by id, including the plaintext password
    pub data: Vec<User>,
}

/// Register a new user
///
/// The body is taken as raw JSON: only presence of `name` and `password` is
/// checked, nothing else is validated. Duplicate names are rejected with a
/// 400, the status the frontend expects for this case.
///
/// # Endpoint
///
/// ```text
/// POST /app/register
/// Content-Type: application/json
///
/// { "name": "alice", "password": "hunter2" }
/// ```
///
/// # Errors
///
/// - `400`: missing name/password, or the name is taken
/// - `500`: any store failure, with a fixed generic message
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Validation("name and password are required".to_string()))?;
    let password = body
        .get("password")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Validation("name and password are required".to_string()))?;

    let existing = state
        .store
        .find_user_by_name(name)
        .await
        .map_err(|e| {
            error!(error = %e, "user lookup failed during registration");
            ApiError::Internal("registration failed".to_string())
        })?;

    if existing.is_some() {
        return Err(ApiError::Conflict("username already exists".to_string()));
    }

    // Two concurrent registrations can both pass the check above; the loser
    // then trips the unique constraint and gets the generic 500 instead of
    // the conflict message.
    let user_id = state
        .store
        .insert_user(NewUser {
            name: name.to_string(),
            password: password.to_string(),
        })
        .await
        .map_err(|e| {
            error!(error = %e, "user insert failed");
            ApiError::Internal("registration failed".to_string())
        })?;

    info!(user_id, name, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "registration successful".to_string(),
            user_id,
        }),
    ))
}

/// List all users
///
/// Projects every user to `{id, name, password}` — the plaintext password
/// exposure is inherited API surface. A store failure surfaces the raw
/// error string to the caller (also inherited).
///
/// # Endpoint
///
/// ```text
/// GET /app/users
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UsersResponse>> {
    let users = state.store.list_users().await?;

    Ok(Json(UsersResponse {
        success: true,
        data: users,
    }))
}
