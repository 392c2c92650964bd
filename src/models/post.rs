//! Post entity.

use serde::{Deserialize, Serialize};

/// Post document stored in MongoDB.
///
/// `user_id` is the authoring user's identifier.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
}
