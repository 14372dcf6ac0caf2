use crate::domain::entities::{Message, Planet, Stage};

/// MessageProvider trait - abstraction for a planet's message source
pub trait MessageProvider: Send + Sync {
    /// Planet this provider speaks for
    fn planet(&self) -> Planet;

    /// Stage the provider was introduced in
    fn stage(&self) -> Stage;

    /// The provider's message. Pure and infallible.
    fn message(&self) -> Message;
}
