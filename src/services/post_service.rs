//! Post lookup service.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{ERR_MISSING_POST_ID, ERR_POST_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::Post;
use crate::repositories::PostRepository;

pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// Fetch a single post by id, rejecting a missing id before storage.
    pub async fn find_by_id(&self, id: Option<i32>) -> Result<Post, ApiError> {
        let id = id.ok_or_else(|| {
            warn!("Rejected post lookup without an id");
            ApiError::BadRequest(ERR_MISSING_POST_ID.to_string())
        })?;

        debug!("Fetching post by id: {}", id);

        let post = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Post not found with id: {}", id);
            ApiError::NotFound(ERR_POST_NOT_FOUND.to_string())
        })?;

        info!("Successfully fetched post: {}", id);
        Ok(post)
    }

    /// Fetch every post, in storage order.
    pub async fn get_all_posts(&self) -> Result<Vec<Post>, ApiError> {
        debug!("Fetching all posts");
        self.repository.find_all().await
    }

    /// Fetch the posts authored by a user. An unknown author yields an empty
    /// list, not an error.
    pub async fn get_posts_by_user(&self, user_id: i32) -> Result<Vec<Post>, ApiError> {
        debug!("Fetching posts for user: {}", user_id);
        self.repository.find_by_user_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockPostRepository;
    use mockall::predicate::eq;

    fn post(id: i32, user_id: i32, title: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
            body: "lorem ipsum".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_find_by_id_without_id_is_rejected_before_storage() {
        let mut repository = MockPostRepository::new();
        repository.expect_find_by_id().times(0);
        let service = PostService::new(Arc::new(repository));

        let err = service.find_by_id(None).await.unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[actix_web::test]
    async fn test_find_by_id_returns_the_matching_post() {
        let mut repository = MockPostRepository::new();
        let expected = post(7, 1, "First post");
        repository
            .expect_find_by_id()
            .with(eq(7))
            .times(1)
            .returning(move |_| Ok(Some(expected.clone())));
        let service = PostService::new(Arc::new(repository));

        let response = service.find_by_id(Some(7)).await.unwrap();

        assert_eq!(7, response.id);
        assert_eq!(1, response.user_id);
        assert_eq!("First post", response.title);
    }

    #[actix_web::test]
    async fn test_find_by_id_with_unknown_id_is_not_found() {
        let mut repository = MockPostRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));
        let service = PostService::new(Arc::new(repository));

        let err = service.find_by_id(Some(99)).await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_get_posts_by_user_with_unknown_author_is_empty() {
        let mut repository = MockPostRepository::new();
        repository
            .expect_find_by_user_id()
            .with(eq(42))
            .returning(|_| Ok(Vec::new()));
        let service = PostService::new(Arc::new(repository));

        let posts = service.get_posts_by_user(42).await.unwrap();

        assert!(posts.is_empty());
    }
}
