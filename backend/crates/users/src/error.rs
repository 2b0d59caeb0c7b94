//! Users Error Types
//!
//! This module provides users-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Input problems render as `{"message": ...}`, everything else as
//! `{"error": ...}`. The split comes from [`ErrorKind::body_field`].

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;
use thiserror::Error;

/// Users-specific result type alias
pub type UsersResult<T> = Result<T, UsersError>;

/// Data-access result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a data-access implementation
///
/// Opaque to HTTP callers: it is logged and replaced by a generic message.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The data-access step that failed
///
/// Selects the generic message returned with a 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ValidateUserId,
    CreateUser,
    CreatePost,
    ListUsers,
    GetUser,
    GetUserPosts,
    DeleteUser,
    UpdateUser,
}

impl Operation {
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Operation::ValidateUserId => "Error occurred while validating user id.",
            Operation::CreateUser => "Error occurred while adding a new user.",
            Operation::CreatePost => "Error occurred while adding new post.",
            Operation::ListUsers => "Error occurred while getting users.",
            Operation::GetUser => "Error occurred while getting user by id.",
            Operation::GetUserPosts => "Error occurred while getting posts for user by user's id",
            Operation::DeleteUser => "Error occurred while deleting",
            Operation::UpdateUser => "Error occurred while updating",
        }
    }
}

/// Users-specific error variants
#[derive(Debug, Error)]
pub enum UsersError {
    /// Path id does not name a stored user
    #[error("Invalid user id.")]
    InvalidUserId,

    /// Empty user body
    #[error("Missing user data.")]
    MissingUserData,

    #[error("Missing required name field")]
    MissingNameField,

    /// Empty post body
    #[error("Missing post data.")]
    MissingPostData,

    /// Post body lacks `text` or `user_id`
    #[error("Missing required text field")]
    MissingTextField,

    /// Field present but not a JSON string
    #[error("Field {0} must be a string")]
    FieldNotString(&'static str),

    /// Body is not a JSON object
    #[error("Malformed JSON body.")]
    MalformedBody(#[source] serde_json::Error),

    /// Body could not be read
    #[error("Malformed JSON body.")]
    UnreadableBody(#[source] BytesRejection),

    #[error("Request body too large.")]
    BodyTooLarge,

    /// Handler-level existence check failed
    #[error("The user with id {0} does not exist.")]
    UserNotFound(UserId),

    /// Data-access collaborator rejected the call
    #[error("{}", .operation.failure_message())]
    Persistence {
        operation: Operation,
        #[source]
        source: StoreError,
    },
}

impl UsersError {
    pub fn persistence(operation: Operation) -> impl FnOnce(StoreError) -> Self {
        move |source| UsersError::Persistence { operation, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UsersError::InvalidUserId
            | UsersError::MissingUserData
            | UsersError::MissingNameField
            | UsersError::MissingPostData
            | UsersError::MissingTextField
            | UsersError::FieldNotString(_)
            | UsersError::MalformedBody(_)
            | UsersError::UnreadableBody(_) => ErrorKind::BadRequest,
            UsersError::BodyTooLarge => ErrorKind::PayloadTooLarge,
            UsersError::UserNotFound(_) => ErrorKind::NotFound,
            UsersError::Persistence { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UsersError::Persistence { operation, source } => {
                tracing::error!(operation = ?operation, error = %source, "Data access failed");
            }
            UsersError::UserNotFound(id) => {
                tracing::warn!(user_id = %id, "User not found");
            }
            UsersError::MalformedBody(e) => {
                tracing::debug!(error = %e, "Rejected malformed body");
            }
            _ => {
                tracing::debug!(error = %self, "Rejected request");
            }
        }
    }
}

impl From<UsersError> for AppError {
    fn from(err: UsersError) -> Self {
        match err {
            UsersError::MalformedBody(source) => AppError::from(source),
            UsersError::Persistence { operation, source } => {
                AppError::internal(operation.failure_message()).with_source(source)
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
