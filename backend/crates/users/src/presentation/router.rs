//! Users Router

use axum::extract::DefaultBodyLimit;
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::infra::postgres::PgUsersRepository;
use crate::presentation::handlers::{self, UsersAppState};
use crate::presentation::middleware::validate_user_id;

/// Create the users router with PostgreSQL repository
pub fn users_router(repo: PgUsersRepository, config: UsersConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a generic users router for any repository implementation
///
/// Routes are relative to the mount point.
pub fn users_router_generic<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let by_id = Router::new()
        .route(
            "/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route(
            "/{id}/posts",
            get(handlers::get_user_posts::<R>).post(handlers::create_post::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            validate_user_id::<R>,
        ));

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .merge(by_id)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
