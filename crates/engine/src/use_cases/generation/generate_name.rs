//! Generate name use case.

use std::sync::Arc;

use charforge_domain::{Dataset, GeneratedName, GenerationError};

use super::selector::{pick, pick_sex};
use crate::infrastructure::{datasets::Datasets, ports::RandomPort};

/// Pick a sex, a first name for that sex, and a last name.
pub struct GenerateName {
    datasets: Arc<Datasets>,
    random: Arc<dyn RandomPort>,
}

impl GenerateName {
    pub fn new(datasets: Arc<Datasets>, random: Arc<dyn RandomPort>) -> Self {
        Self { datasets, random }
    }

    /// Execute the generate name use case.
    ///
    /// Checks run in order: every name list empty, then the first-name list
    /// for the chosen sex, then last names. The last-name check applies even
    /// when both first-name lists are populated.
    pub fn execute(&self) -> Result<GeneratedName, GenerationError> {
        let names = self.datasets.names();
        if names.is_empty() {
            return Err(GenerationError::unavailable(Dataset::Names));
        }

        let sex = pick_sex(self.random.as_ref());

        let first_names = names.first_names_for(sex);
        if first_names.is_empty() {
            return Err(GenerationError::unavailable(Dataset::first_names(sex)));
        }
        if names.last_names.is_empty() {
            return Err(GenerationError::unavailable(Dataset::LastNames));
        }

        let generated = GeneratedName {
            first_name: pick(self.random.as_ref(), first_names).clone(),
            last_name: pick(self.random.as_ref(), &names.last_names).clone(),
            sex,
        };
        tracing::debug!(
            first_name = %generated.first_name,
            last_name = %generated.last_name,
            sex = %generated.sex,
            "Generated name"
        );

        Ok(generated)
    }
}
