//! Post read handlers.

use actix_web::{web, HttpResponse};
use log::info;

use crate::constants::{MSG_POSTS_RETRIEVED, MSG_POST_FOUND, MSG_USER_POSTS_RETRIEVED};
use crate::errors::ApiError;
use crate::models::{ApiResponse, PostResponse};
use crate::services::PostService;

/// List all posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "List of posts", body = [PostResponse]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, ApiError> {
    let posts = post_service.get_all_posts().await?;
    let post_responses: Vec<PostResponse> = posts.into_iter().map(|p| p.into()).collect();

    info!("Listed {} posts", post_responses.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_POSTS_RETRIEVED, post_responses)))
}

/// Get a specific post by ID
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 404, description = "Post not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_post(
    post_service: web::Data<PostService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();

    let post = post_service.find_by_id(Some(post_id)).await?;
    let post_response: PostResponse = post.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_POST_FOUND, post_response)))
}

/// List the posts authored by a user
#[utoipa::path(
    get,
    path = "/api/users/{id}/posts",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "Authoring user ID")
    ),
    responses(
        (status = 200, description = "Posts authored by the user", body = [PostResponse]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user_posts(
    post_service: web::Data<PostService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let posts = post_service.get_posts_by_user(user_id).await?;
    let post_responses: Vec<PostResponse> = posts.into_iter().map(|p| p.into()).collect();

    info!("Listed {} posts for user {}", post_responses.len(), user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_POSTS_RETRIEVED, post_responses)))
}
