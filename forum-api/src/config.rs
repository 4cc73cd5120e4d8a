/// Configuration management for the API server
///
/// Loaded once from environment variables at startup.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: optional PostgreSQL connection string; absent, invalid,
///   or an unresolved `{{...}}` placeholder selects the embedded store
/// - `DATABASE_FILE`: SQLite file path (default: database.db)
/// - `HOST`: host to bind to (default: 0.0.0.0)
/// - `PORT`: port to bind to (default: 50000)
/// - `RUST_LOG`: log filter

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Optional PostgreSQL connection descriptor
    ///
    /// May still be an unresolved deploy-platform placeholder; the store
    /// connector decides whether it is usable.
    pub database_url: Option<String>,

    /// Path of the embedded SQLite file
    pub database_file: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "50000".to_string())
            .parse::<u16>()?;

        let database_url = env::var("DATABASE_URL").ok();
        let database_file = env::var("DATABASE_FILE").unwrap_or_else(|_| "database.db".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            database_file,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
