//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Message aggregation
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
