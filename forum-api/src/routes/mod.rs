/// API route handlers
///
/// - `health`: Health check endpoint
/// - `users`: Registration and user listing
/// - `posts`: Post creation, listing, and retrieval

pub mod health;
pub mod posts;
pub mod users;
