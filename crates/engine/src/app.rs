//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{datasets::Datasets, ports::RandomPort};
use crate::use_cases::GenerationUseCases;

/// Main application state.
///
/// Built once at startup and passed to HTTP handlers via Axum state.
/// Nothing in it changes after construction.
pub struct App {
    pub datasets: Arc<Datasets>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub generation: GenerationUseCases,
}

impl App {
    pub fn new(datasets: Arc<Datasets>, random: Arc<dyn RandomPort>) -> Self {
        let generation = GenerationUseCases::new(datasets.clone(), random);

        Self {
            datasets,
            use_cases: UseCases { generation },
        }
    }
}
