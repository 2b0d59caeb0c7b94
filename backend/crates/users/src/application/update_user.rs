//! Update User Use Case
//!
//! update → get_by_id, strictly in that order. The refreshed row is returned
//! rather than trusting the affected-row count.

use crate::application::validate::{JsonObject, user_changes};
use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::error::{Operation, UsersError, UsersResult};
use kernel::id::UserId;
use std::sync::Arc;

pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: UserId, body: &JsonObject) -> UsersResult<User> {
        let changes = user_changes(body)?;

        let updated = self
            .user_repo
            .update(id, changes)
            .await
            .map_err(UsersError::persistence(Operation::UpdateUser))?;

        // A failed refresh reads as not-found, not as a 500.
        match self.user_repo.get_by_id(id).await {
            Ok(Some(user)) => {
                tracing::info!(user_id = %id, updated, "User updated");
                Ok(user)
            }
            Ok(None) => Err(UsersError::UserNotFound(id)),
            Err(e) => {
                tracing::error!(user_id = %id, error = %e, "Refresh after update failed");
                Err(UsersError::UserNotFound(id))
            }
        }
    }
}
