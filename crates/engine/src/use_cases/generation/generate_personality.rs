//! Generate personality use case.

use std::sync::Arc;

use charforge_domain::{Dataset, GeneratedPersonality, GenerationError};

use super::selector::pick;
use crate::infrastructure::{datasets::Datasets, ports::RandomPort};

/// Pick a personality type and an alignment, independently.
pub struct GeneratePersonality {
    datasets: Arc<Datasets>,
    random: Arc<dyn RandomPort>,
}

impl GeneratePersonality {
    pub fn new(datasets: Arc<Datasets>, random: Arc<dyn RandomPort>) -> Self {
        Self { datasets, random }
    }

    /// Execute the generate personality use case.
    ///
    /// Fails when either list is empty; when both are, the error names the
    /// whole catalog.
    pub fn execute(&self) -> Result<GeneratedPersonality, GenerationError> {
        let catalog = self.datasets.personality();
        if catalog.is_empty() {
            return Err(GenerationError::unavailable(Dataset::Personality));
        }
        if catalog.personality_types.is_empty() {
            return Err(GenerationError::unavailable(Dataset::PersonalityTypes));
        }
        if catalog.alignments.is_empty() {
            return Err(GenerationError::unavailable(Dataset::Alignments));
        }

        let generated = GeneratedPersonality {
            personality_type: pick(self.random.as_ref(), &catalog.personality_types).clone(),
            alignment: pick(self.random.as_ref(), &catalog.alignments).clone(),
        };
        tracing::debug!(
            personality_type = %generated.personality_type.name,
            alignment = %generated.alignment,
            "Generated personality"
        );

        Ok(generated)
    }
}
