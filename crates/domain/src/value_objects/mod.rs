//! Value objects produced by character generation.

pub mod generated;
pub mod sex;

pub use generated::{GeneratedCharacter, GeneratedName, GeneratedPersonality};
pub use sex::Sex;
