//! Planet A message provider

use crate::domain::entities::{Message, Planet, Stage};
use crate::domain::traits::MessageProvider;

pub const MESSAGE_A: &str = "I come from planet A";

/// Returns planet A's message
pub fn message_from_a() -> &'static str {
    MESSAGE_A
}

/// Provider for planet A, introduced in the basic layout
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetA;

impl MessageProvider for PlanetA {
    fn planet(&self) -> Planet {
        Planet::A
    }

    fn stage(&self) -> Stage {
        Stage::Basic
    }

    fn message(&self) -> Message {
        Message::new(message_from_a())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let got = message_from_a();
        assert_eq!(got, "I come from planet A");
    }

    #[test]
    fn test_message_is_stable_across_calls() {
        let first = message_from_a();
        for _ in 0..100 {
            assert_eq!(message_from_a(), first);
        }
    }

    #[test]
    fn test_no_trailing_punctuation() {
        assert!(!message_from_a().ends_with('!'));
    }

    #[test]
    fn test_provider_delegates() {
        let provider = PlanetA;
        assert_eq!(provider.planet(), Planet::A);
        assert_eq!(provider.stage(), Stage::Basic);
        assert_eq!(provider.message().text(), MESSAGE_A);
    }
}
