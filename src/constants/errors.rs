//! Error message constants used throughout the application.

// Lookup errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_POST_NOT_FOUND: &str = "Post not found";
pub const ERR_COMMENT_NOT_FOUND: &str = "Comment not found";

// Argument errors
pub const ERR_MISSING_USER_ID: &str = "User id is required";
pub const ERR_MISSING_POST_ID: &str = "Post id is required";
pub const ERR_MISSING_COMMENT_ID: &str = "Comment id is required";
