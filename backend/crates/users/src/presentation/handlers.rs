//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::application::{
    CreatePostUseCase, CreateUserUseCase, DeleteUserUseCase, GetUserPostsUseCase, GetUserUseCase,
    ListUsersUseCase, UpdateUserUseCase,
};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::UsersResult;
use crate::presentation::dto::{PostResponse, UserResponse};
use crate::presentation::extract::JsonBody;
use crate::presentation::middleware::ResolvedUser;

/// Shared state for users handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    JsonBody(body): JsonBody,
) -> UsersResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&body).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/users/{id}/posts
pub async fn create_post<R>(
    State(state): State<UsersAppState<R>>,
    Extension(ResolvedUser(owner)): Extension<ResolvedUser>,
    JsonBody(body): JsonBody,
) -> UsersResult<(StatusCode, Json<PostResponse>)>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());
    let post = use_case.execute(&owner, &body).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

// ============================================================================
// Read
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
) -> UsersResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());
    let users = use_case.execute().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    Extension(ResolvedUser(user)): Extension<ResolvedUser>,
) -> UsersResult<Json<UserResponse>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.repo.clone());
    let user = use_case.execute(user.id).await?;

    Ok(Json(user.into()))
}

/// GET /api/users/{id}/posts
pub async fn get_user_posts<R>(
    State(state): State<UsersAppState<R>>,
    Extension(ResolvedUser(user)): Extension<ResolvedUser>,
) -> UsersResult<Json<Vec<PostResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserPostsUseCase::new(state.repo.clone());
    let posts = use_case.execute(user.id).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

// ============================================================================
// Update / Delete
// ============================================================================

/// PUT /api/users/{id}
///
/// Answers 201 with the refreshed row.
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    Extension(ResolvedUser(user)): Extension<ResolvedUser>,
    JsonBody(body): JsonBody,
) -> UsersResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone());
    let user = use_case.execute(user.id, &body).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    Extension(ResolvedUser(user)): Extension<ResolvedUser>,
) -> UsersResult<Json<UserResponse>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone());
    let snapshot = use_case.execute(user).await?;

    Ok(Json(snapshot.into()))
}
