//! Response shapes returned by the HTTP layer.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Comment, Post, User};

/// User data returned in API responses (without the password).
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User's display name
    #[schema(example = "Leanne Graham")]
    pub name: String,
    /// User's username
    #[schema(example = "Bret")]
    pub username: String,
    /// User's email address
    #[schema(example = "leanne@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
        }
    }
}

/// Post data returned in API responses.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct PostResponse {
    /// Post's unique identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Identifier of the authoring user
    #[schema(example = 1)]
    pub user_id: i32,
    /// Post title
    #[schema(example = "A day in the life")]
    pub title: String,
    /// Post body
    pub body: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            body: post.body,
        }
    }
}

/// Comment data returned in API responses.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct CommentResponse {
    /// Comment's unique identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Identifier of the post the comment belongs to
    #[schema(example = 1)]
    pub post_id: i32,
    /// Comment content
    pub content: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
        }
    }
}

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
