//! Create Post Use Case
//!
//! The owner has already been resolved from the path, so a post is never
//! written for a user that was unknown at validation time.

use crate::application::validate::{JsonObject, new_post};
use crate::domain::entities::{Post, User};
use crate::domain::repository::PostRepository;
use crate::error::{Operation, UsersError, UsersResult};
use std::sync::Arc;

pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, owner: &User, body: &JsonObject) -> UsersResult<Post> {
        let new_post = new_post(body, owner.id)?;

        let post = self
            .post_repo
            .insert(new_post)
            .await
            .map_err(UsersError::persistence(Operation::CreatePost))?;

        tracing::info!(post_id = %post.id, user_id = %owner.id, "Post created");
        Ok(post)
    }
}
