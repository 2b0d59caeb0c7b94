//! Presentation Layer
//!
//! HTTP handlers, extractors, middleware and DTOs for the API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
