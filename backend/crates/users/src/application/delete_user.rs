//! Delete User Use Case
//!
//! Answers with the user as it was before deletion, not with the row count.
//! Posts owned by the user are left in place.

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::error::{Operation, UsersError, UsersResult};
use std::sync::Arc;

pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// `snapshot` is the user resolved by the id gate
    pub async fn execute(&self, snapshot: User) -> UsersResult<User> {
        let deleted = self
            .user_repo
            .remove(snapshot.id)
            .await
            .map_err(UsersError::persistence(Operation::DeleteUser))?;

        tracing::info!(user_id = %snapshot.id, deleted, "User deleted");
        Ok(snapshot)
    }
}
