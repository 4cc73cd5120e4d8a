//! # Forum API Server Library
//!
//! HTTP surface of the forum backend.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Environment configuration
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
