//! Output adapters

pub mod console;

pub use console::ConsoleSink;
