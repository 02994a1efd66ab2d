//! Forum data and the rules for viewing and creating posts.
mod model;
pub mod seed;
mod store;
mod time;

pub use model::{CURRENT_USER, Category, Post};
pub use store::{DraftRejection, ForumStore};
pub use time::{now_millis, time_ago};
