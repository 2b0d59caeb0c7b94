//! API DTOs (Data Transfer Objects)
//!
//! Field names match the stored columns, snake_case.

use crate::domain::entities::{Post, User};
use kernel::id::{PostId, UserId};
use serde::Serialize;

/// User as returned by every user route
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// Post as returned by the posts routes
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub text: String,
    pub user_id: UserId,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            text: post.text,
            user_id: post.user_id,
        }
    }
}
