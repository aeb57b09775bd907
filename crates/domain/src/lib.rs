//! Charforge domain types.
//!
//! Holds the static datasets a character is drawn from, the records produced
//! by generation, and the error vocabulary shared with the engine.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Names, PersonalityCatalog, PersonalityType};
pub use error::{Dataset, GenerationError};
pub use value_objects::{GeneratedCharacter, GeneratedName, GeneratedPersonality, Sex};
