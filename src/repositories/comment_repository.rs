//! Comment repository for all MongoDB operations related to comments.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_COMMENTS;
use crate::errors::ApiError;
use crate::models::Comment;

/// Storage contract for comment lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, ApiError>;
    async fn find_all(&self) -> Result<Vec<Comment>, ApiError>;
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, ApiError>;
}

/// MongoDB-backed comment repository.
pub struct MongoCommentRepository {
    collection: Collection<Comment>,
}

impl MongoCommentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_COMMENTS),
        }
    }

    /// Create an index on `post_id` for the per-post scan.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for comments collection...");

        let indexes = vec![IndexModel::builder().keys(doc! { "post_id": 1 }).build()];

        self.collection.create_indexes(indexes).await?;
        info!("Comment indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, ApiError> {
        debug!("Repository: Finding comment by id: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> Result<Vec<Comment>, ApiError> {
        debug!("Repository: Finding all comments");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, ApiError> {
        debug!("Repository: Finding comments for post: {}", post_id);
        let cursor = self.collection.find(doc! { "post_id": post_id }).await?;
        Ok(cursor.try_collect().await?)
    }
}
