//! User id gate
//!
//! Route layer for every `/{id}` route. On success the resolved user rides
//! along in request extensions as [`ResolvedUser`]; otherwise the terminal
//! response is returned and the handler never runs.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::ResolveUserUseCase;
use crate::domain::entities::User;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::UsersError;
use crate::presentation::handlers::UsersAppState;

/// User resolved from the path id, stored in request extensions
#[derive(Debug, Clone)]
pub struct ResolvedUser(pub User);

/// Middleware that requires the path id to name a stored user
pub async fn validate_user_id<R>(
    State(state): State<UsersAppState<R>>,
    id: Result<Path<String>, PathRejection>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    // An undecodable segment cannot name a user either
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Path id could not be decoded");
            return UsersError::InvalidUserId.into_response();
        }
    };

    let use_case = ResolveUserUseCase::new(state.repo.clone());

    match use_case.execute(&id).await {
        Ok(user) => {
            req.extensions_mut().insert(ResolvedUser(user));
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}
