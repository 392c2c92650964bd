//! Comment lookup service.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{ERR_COMMENT_NOT_FOUND, ERR_MISSING_COMMENT_ID};
use crate::errors::ApiError;
use crate::models::Comment;
use crate::repositories::CommentRepository;

pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    /// Fetch a single comment by id, rejecting a missing id before storage.
    pub async fn find_by_id(&self, id: Option<i32>) -> Result<Comment, ApiError> {
        let id = id.ok_or_else(|| {
            warn!("Rejected comment lookup without an id");
            ApiError::BadRequest(ERR_MISSING_COMMENT_ID.to_string())
        })?;

        debug!("Fetching comment by id: {}", id);

        let comment = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Comment not found with id: {}", id);
            ApiError::NotFound(ERR_COMMENT_NOT_FOUND.to_string())
        })?;

        info!("Successfully fetched comment: {}", id);
        Ok(comment)
    }

    /// Fetch every comment, in storage order.
    pub async fn get_all_comments(&self) -> Result<Vec<Comment>, ApiError> {
        debug!("Fetching all comments");
        self.repository.find_all().await
    }

    /// Fetch the comments attached to a post. An unknown post yields an
    /// empty list, not an error.
    pub async fn get_comments_by_post(&self, post_id: i32) -> Result<Vec<Comment>, ApiError> {
        debug!("Fetching comments for post: {}", post_id);
        self.repository.find_by_post_id(post_id).await
    }
}
