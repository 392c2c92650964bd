//! Success message constants used throughout the application.

// User messages
pub const MSG_USER_FOUND: &str = "User found";
pub const MSG_USERS_RETRIEVED: &str = "Users retrieved successfully";
pub const MSG_USER_POSTS_RETRIEVED: &str = "User posts retrieved successfully";

// Post messages
pub const MSG_POST_FOUND: &str = "Post found";
pub const MSG_POSTS_RETRIEVED: &str = "Posts retrieved successfully";
pub const MSG_POST_COMMENTS_RETRIEVED: &str = "Post comments retrieved successfully";

// Comment messages
pub const MSG_COMMENT_FOUND: &str = "Comment found";
pub const MSG_COMMENTS_RETRIEVED: &str = "Comments retrieved successfully";
