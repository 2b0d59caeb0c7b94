//! Infrastructure Layer - Data store implementations

pub mod memory;
pub mod postgres;
