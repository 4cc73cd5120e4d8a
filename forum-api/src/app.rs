/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use forum_api::{app::{build_router, AppState}, config::Config};
/// use forum_store::store::Store;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let store = Store::connect(config.database_url.as_deref(), &config.database_file).await?;
/// let app = build_router(AppState::new(store));
/// # Ok(())
/// # }
/// ```

use axum::{
    routing::{get, post},
    Router,
};
use forum_store::store::Store;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned per request via Axum's `State` extractor; the store clones are
/// cheap pool handles. The store is resolved once at startup and handlers
/// cannot switch backends.
#[derive(Clone)]
pub struct AppState {
    /// Resolved store handle (PostgreSQL or embedded SQLite)
    pub store: Store,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Builds the Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /app
/// ├── POST /register    # Register a user
/// ├── GET  /users       # List users
/// ├── POST /posts       # Create a post
/// ├── GET  /posts       # List posts (preview + count)
/// ├── GET  /posts/:id   # Get one post (full content)
/// └── GET  /health      # Health check, no store access
/// ```
///
/// CORS is permissive; any origin may call the API.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let app_routes = Router::new()
        .route("/register", post(routes::users::register))
        .route("/users", get(routes::users::list_users))
        .route(
            "/posts",
            post(routes::posts::create_post).get(routes::posts::list_posts),
        )
        .route("/posts/:id", get(routes::posts::get_post))
        .route("/health", get(routes::health::health_check));

    Router::new()
        .nest("/app", app_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
