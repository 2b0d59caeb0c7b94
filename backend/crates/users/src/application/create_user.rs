//! Create User Use Case

use crate::application::validate::{JsonObject, new_user};
use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::error::{Operation, UsersError, UsersResult};
use std::sync::Arc;

pub struct CreateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CreateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, body: &JsonObject) -> UsersResult<User> {
        let new_user = new_user(body)?;

        let user = self
            .user_repo
            .insert(new_user)
            .await
            .map_err(UsersError::persistence(Operation::CreateUser))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
