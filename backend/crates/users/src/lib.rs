//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, data-access traits
//! - `application/` - Validators and use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, id gate, router
//!
//! ## Request flow
//! - `/{id}` routes pass the id gate first; an unknown id answers 400
//! - Body validators run next and short-circuit on the first failure
//! - Data-access failures answer 500 with a generic message; the cause is only logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{StoreError, StoreResult, UsersError, UsersResult};
pub use infra::memory::InMemoryUsersRepository;
pub use infra::postgres::PgUsersRepository;
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}
