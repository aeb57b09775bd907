//! Generate character use case.

use std::sync::Arc;

use charforge_domain::{GeneratedCharacter, GenerationError};

use super::{GenerateName, GeneratePersonality};

/// A name plus a personality, built from the other two use cases.
pub struct GenerateCharacter {
    name: Arc<GenerateName>,
    personality: Arc<GeneratePersonality>,
}

impl GenerateCharacter {
    pub fn new(name: Arc<GenerateName>, personality: Arc<GeneratePersonality>) -> Self {
        Self { name, personality }
    }

    /// Execute the generate character use case.
    ///
    /// Name generation runs first, so a names failure wins over a personality failure.
    pub fn execute(&self) -> Result<GeneratedCharacter, GenerationError> {
        let name = self.name.execute()?;
        let personality = self.personality.execute()?;
        Ok(GeneratedCharacter::new(name, personality))
    }
}
