//! # Forum Store
//!
//! Data layer for the forum backend. Wraps the two supported SQL backends
//! (PostgreSQL and an embedded SQLite file) behind a single [`store::Store`]
//! handle so the HTTP layer never branches on dialect.
//!
//! ## Module Organization
//!
//! - `models`: Database row types and insert payloads
//! - `store`: Backend resolution, schema initialization, and all SQL
//! - `time`: Display-time normalization for stored timestamps

pub mod models;
pub mod store;
pub mod time;

/// Current version of the forum store library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
