//! Planet B message provider

use crate::domain::entities::{Message, Planet, Stage};
use crate::domain::traits::MessageProvider;

pub const MESSAGE_B: &str = "I come from planet B!";

/// Returns planet B's message
pub fn message_from_b() -> &'static str {
    MESSAGE_B
}

/// Provider for planet B, introduced in the intermediate layout
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetB;

impl MessageProvider for PlanetB {
    fn planet(&self) -> Planet {
        Planet::B
    }

    fn stage(&self) -> Stage {
        Stage::Intermediate
    }

    fn message(&self) -> Message {
        Message::new(message_from_b())
    }
}
