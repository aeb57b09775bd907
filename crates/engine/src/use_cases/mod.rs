//! Use cases - request-scoped orchestration over the datasets.

pub mod generation;

pub use generation::{GenerateCharacter, GenerateName, GeneratePersonality, GenerationUseCases};
