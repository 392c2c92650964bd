//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_POSTS: &str = "posts";
pub const COLLECTION_COMMENTS: &str = "comments";
