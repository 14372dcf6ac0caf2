//! Application services - Business logic orchestration

pub mod aggregator;

pub use aggregator::Aggregator;
