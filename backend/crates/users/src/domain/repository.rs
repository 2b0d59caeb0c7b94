//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the infra layer.
//! Uniqueness of generated ids is the store's responsibility.

use crate::domain::entities::{NewPost, NewUser, Post, User, UserChanges};
use crate::error::StoreResult;
use kernel::id::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its generated id
    async fn insert(&self, user: NewUser) -> StoreResult<User>;

    /// All users
    async fn get(&self) -> StoreResult<Vec<User>>;

    async fn get_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Posts owned by a user
    async fn get_user_posts(&self, user_id: UserId) -> StoreResult<Vec<Post>>;

    /// Replace fields; returns the number of affected rows
    async fn update(&self, id: UserId, changes: UserChanges) -> StoreResult<u64>;

    /// Delete by id; returns the number of affected rows
    async fn remove(&self, id: UserId) -> StoreResult<u64>;
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a post and return it with its generated id
    async fn insert(&self, post: NewPost) -> StoreResult<Post>;
}
