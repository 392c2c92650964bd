//! User entity.

use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// Identifiers are assigned by whatever seeds the collection, so `id` is a
/// plain field rather than a driver-generated `ObjectId`. The `password`
/// field is an opaque secret kept out of API responses; see
/// [`UserResponse`](crate::models::UserResponse).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}
