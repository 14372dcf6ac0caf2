//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Message, Planet, Stage)
//! - Traits: Abstractions for infrastructure (MessageProvider, OutputSink)

pub mod entities;
pub mod traits;
