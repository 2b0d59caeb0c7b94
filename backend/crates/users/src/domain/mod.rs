//! Domain Layer - Entities and data-access contracts
//!
//! This layer contains:
//! - Domain entities (User, Post) and their write models
//! - Repository traits (interfaces to the data store)

pub mod entities;
pub mod repository;
