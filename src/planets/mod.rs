//! Planet message providers

pub mod a;
pub mod b;

pub use a::{message_from_a, PlanetA, MESSAGE_A};
pub use b::{message_from_b, PlanetB, MESSAGE_B};
