//! Character generation use cases.
//!
//! Each use case draws uniformly from the shared datasets and returns a fresh
//! record. Emptiness is checked before any selection, so a missing list always
//! surfaces as [`GenerationError::DataUnavailable`](charforge_domain::GenerationError).

mod generate_character;
mod generate_name;
mod generate_personality;
pub mod selector;

use std::sync::Arc;

pub use generate_character::GenerateCharacter;
pub use generate_name::GenerateName;
pub use generate_personality::GeneratePersonality;

use crate::infrastructure::{datasets::Datasets, ports::RandomPort};

/// Container for generation use cases.
pub struct GenerationUseCases {
    pub name: Arc<GenerateName>,
    pub personality: Arc<GeneratePersonality>,
    pub character: Arc<GenerateCharacter>,
}

impl GenerationUseCases {
    pub fn new(datasets: Arc<Datasets>, random: Arc<dyn RandomPort>) -> Self {
        let name = Arc::new(GenerateName::new(datasets.clone(), random.clone()));
        let personality = Arc::new(GeneratePersonality::new(datasets, random));
        let character = Arc::new(GenerateCharacter::new(name.clone(), personality.clone()));

        Self {
            name,
            personality,
            character,
        }
    }
}
