/// Database models for the forum
///
/// # Models
///
/// - `user`: Registered forum accounts
/// - `post`: Forum posts, joined to their author on read

pub mod post;
pub mod user;

pub use post::{NewPost, PostRow};
pub use user::{NewUser, User};
