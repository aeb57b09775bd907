//! Error types for character generation.

use std::fmt;

use thiserror::Error;

use crate::value_objects::Sex;

/// Identifies a dataset (or one list inside it) that an operation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// The whole names dataset (all three lists).
    Names,
    MaleFirstNames,
    FemaleFirstNames,
    LastNames,
    /// The whole personality catalog (both lists).
    Personality,
    PersonalityTypes,
    Alignments,
}

impl Dataset {
    /// The first-name list for a given sex.
    pub fn first_names(sex: Sex) -> Self {
        match sex {
            Sex::Male => Dataset::MaleFirstNames,
            Sex::Female => Dataset::FemaleFirstNames,
        }
    }

    /// Message returned to clients when this dataset is empty.
    pub fn unavailable_message(&self) -> &'static str {
        match self {
            Dataset::Names => "Names data not loaded or empty",
            Dataset::MaleFirstNames => "No Male first names available",
            Dataset::FemaleFirstNames => "No Female first names available",
            Dataset::LastNames => "No last names available",
            Dataset::Personality => "Personality data not loaded or empty",
            Dataset::PersonalityTypes => "No personality types available",
            Dataset::Alignments => "No alignments available",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::Names => "names",
            Dataset::MaleFirstNames => "male first names",
            Dataset::FemaleFirstNames => "female first names",
            Dataset::LastNames => "last names",
            Dataset::Personality => "personality",
            Dataset::PersonalityTypes => "personality types",
            Dataset::Alignments => "alignments",
        };
        f.write_str(name)
    }
}

/// Errors produced while generating a character record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A list required for selection is empty at request time.
    #[error("{}", .0.unavailable_message())]
    DataUnavailable(Dataset),
}

impl GenerationError {
    pub fn unavailable(dataset: Dataset) -> Self {
        Self::DataUnavailable(dataset)
    }

    /// The dataset this error refers to.
    pub fn dataset(&self) -> Dataset {
        match self {
            Self::DataUnavailable(dataset) => *dataset,
        }
    }
}
