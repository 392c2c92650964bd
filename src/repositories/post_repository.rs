//! Post repository for all MongoDB operations related to posts.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_POSTS;
use crate::errors::ApiError;
use crate::models::Post;

/// Storage contract for post lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, ApiError>;
    async fn find_all(&self) -> Result<Vec<Post>, ApiError>;
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, ApiError>;
}

/// MongoDB-backed post repository.
pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_POSTS),
        }
    }

    /// Create an index on `user_id` for the by-author scan.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for posts collection...");

        let indexes = vec![IndexModel::builder().keys(doc! { "user_id": 1 }).build()];

        self.collection.create_indexes(indexes).await?;
        info!("Post indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, ApiError> {
        debug!("Repository: Finding post by id: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_all(&self) -> Result<Vec<Post>, ApiError> {
        debug!("Repository: Finding all posts");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, ApiError> {
        debug!("Repository: Finding posts for user: {}", user_id);
        let cursor = self.collection.find(doc! { "user_id": user_id }).await?;
        Ok(cursor.try_collect().await?)
    }
}
