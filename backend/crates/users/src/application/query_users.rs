//! Read-only Use Cases

use crate::domain::entities::{Post, User};
use crate::domain::repository::UserRepository;
use crate::error::{Operation, UsersError, UsersResult};
use kernel::id::UserId;
use std::sync::Arc;

/// List every user
pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> UsersResult<Vec<User>> {
        let users = self
            .user_repo
            .get()
            .await
            .map_err(UsersError::persistence(Operation::ListUsers))?;

        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}

/// Fetch one user
///
/// Looks the user up again even though the id gate already did; a row
/// deleted in between answers 404.
pub struct GetUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: UserId) -> UsersResult<User> {
        self.user_repo
            .get_by_id(id)
            .await
            .map_err(UsersError::persistence(Operation::GetUser))?
            .ok_or(UsersError::UserNotFound(id))
    }
}

/// Posts owned by one user
pub struct GetUserPostsUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetUserPostsUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> UsersResult<Vec<Post>> {
        let posts = self
            .user_repo
            .get_user_posts(user_id)
            .await
            .map_err(UsersError::persistence(Operation::GetUserPosts))?;

        tracing::debug!(user_id = %user_id, count = posts.len(), "Listed user posts");
        Ok(posts)
    }
}
