//! # Forum API Server
//!
//! Minimal forum backend: user registration and listing, post creation,
//! listing, and retrieval. Backed by PostgreSQL when `DATABASE_URL` is
//! usable, otherwise by an embedded SQLite file created on first start.

use forum_api::app::{build_router, AppState};
use forum_api::config::Config;
use forum_store::store::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_api=debug,forum_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Backend choice happens exactly once, here. Handlers receive the
    // resolved store through application state and cannot change it.
    let store = Store::connect(config.database_url.as_deref(), &config.database_file).await?;
    tracing::info!(dialect = store.dialect(), "store resolved");

    // Failures inside are logged and swallowed; startup continues.
    store.init_schema().await;

    let state = AppState::new(store);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("forum backend listening on http://{}", addr);
    tracing::info!("POST /app/register   - register a user");
    tracing::info!("GET  /app/users      - list users");
    tracing::info!("POST /app/posts      - create a post");
    tracing::info!("GET  /app/posts      - list posts");
    tracing::info!("GET  /app/posts/:id  - get a post");
    tracing::info!("GET  /app/health     - health check");

    axum::serve(listener, app).await?;

    Ok(())
}
