//! Application Layer
//!
//! Validators and one use case per route. Each use case is a straight
//! sequence of awaited data-access calls with no retries.

pub mod config;
pub mod create_post;
pub mod create_user;
pub mod delete_user;
pub mod query_users;
pub mod resolve_user;
pub mod update_user;
pub mod validate;

// Re-exports
pub use config::UsersConfig;
pub use create_post::CreatePostUseCase;
pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use query_users::{GetUserPostsUseCase, GetUserUseCase, ListUsersUseCase};
pub use resolve_user::ResolveUserUseCase;
pub use update_user::UpdateUserUseCase;
pub use validate::{JsonObject, validate_post, validate_user};
