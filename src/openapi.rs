use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{CommentResponse, HealthResponse, PostResponse, UserResponse};

/// OpenAPI documentation for the Blog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "1.0.0",
        description = "A minimal REST API exposing blog users, posts, and comments."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User lookup endpoints"),
        (name = "Posts", description = "Post lookup endpoints"),
        (name = "Comments", description = "Comment lookup endpoints")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::get_user_posts,
        crate::handlers::get_posts,
        crate::handlers::get_post,
        crate::handlers::get_post_comments,
        crate::handlers::get_comments,
        crate::handlers::get_comment
    ),
    components(
        schemas(
            UserResponse,
            PostResponse,
            CommentResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
