//! Resolve User Use Case
//!
//! Gate for every `/{id}` route: the path id must name a stored user.
//! The resolved user is handed to the handler so it is not fetched twice.

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::error::{Operation, UsersError, UsersResult};
use kernel::id::UserId;
use std::sync::Arc;

pub struct ResolveUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ResolveUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Unparsable and unknown ids both answer 400, not 404.
    pub async fn execute(&self, raw_id: &str) -> UsersResult<User> {
        let id: UserId = raw_id.parse().map_err(|e| {
            tracing::debug!(error = %e, "Path id is not an integer");
            UsersError::InvalidUserId
        })?;

        let user = self
            .user_repo
            .get_by_id(id)
            .await
            .map_err(UsersError::persistence(Operation::ValidateUserId))?;

        match user {
            Some(user) => Ok(user),
            None => {
                tracing::debug!(user_id = %id, "No user for path id");
                Err(UsersError::InvalidUserId)
            }
        }
    }
}
