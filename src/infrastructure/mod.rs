//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Output sinks (console)

pub mod config;
pub mod adapters;
