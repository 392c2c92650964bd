//! Comment entity.

use serde::{Deserialize, Serialize};

/// Comment document stored in MongoDB, attached to a post via `post_id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: i32,
    pub post_id: i32,
    pub content: String,
}
