//! Domain traits - Abstractions for infrastructure implementations

pub mod provider;
pub mod sink;

pub use provider::MessageProvider;
pub use sink::OutputSink;
