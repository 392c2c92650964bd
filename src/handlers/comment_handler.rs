//! Comment read handlers.

use actix_web::{web, HttpResponse};
use log::info;

use crate::constants::{MSG_COMMENTS_RETRIEVED, MSG_COMMENT_FOUND, MSG_POST_COMMENTS_RETRIEVED};
use crate::errors::ApiError;
use crate::models::{ApiResponse, CommentResponse};
use crate::services::CommentService;

/// List all comments
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "Comments",
    responses(
        (status = 200, description = "List of comments", body = [CommentResponse]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_comments(
    comment_service: web::Data<CommentService>,
) -> Result<HttpResponse, ApiError> {
    let comments = comment_service.get_all_comments().await?;
    let comment_responses: Vec<CommentResponse> =
        comments.into_iter().map(|c| c.into()).collect();

    info!("Listed {} comments", comment_responses.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_COMMENTS_RETRIEVED,
        comment_responses,
    )))
}

/// Get a specific comment by ID
#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    tag = "Comments",
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment found", body = CommentResponse),
        (status = 404, description = "Comment not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let comment_id = path.into_inner();

    let comment = comment_service.find_by_id(Some(comment_id)).await?;
    let comment_response: CommentResponse = comment.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_COMMENT_FOUND, comment_response)))
}

/// List the comments attached to a post
#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    tag = "Comments",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments on the post", body = [CommentResponse]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_post_comments(
    comment_service: web::Data<CommentService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();

    let comments = comment_service.get_comments_by_post(post_id).await?;
    let comment_responses: Vec<CommentResponse> =
        comments.into_iter().map(|c| c.into()).collect();

    info!(
        "Listed {} comments for post {}",
        comment_responses.len(),
        post_id
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_POST_COMMENTS_RETRIEVED,
        comment_responses,
    )))
}
