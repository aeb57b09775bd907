//! Data store - the two static datasets, parsed once at startup.
//!
//! Both datasets ship inside the binary. Either one can be replaced by a file
//! on disk (see [`AppConfig`]). A dataset that fails to load is logged and
//! left empty; requests that need it then fail individually.

use std::borrow::Cow;
use std::path::PathBuf;

use charforge_domain::{Dataset, Names, PersonalityCatalog};
use thiserror::Error;

use crate::infrastructure::config::AppConfig;

/// Bundled names dataset.
pub const EMBEDDED_NAMES: &[u8] = include_bytes!("../../data/names.json");

/// Bundled personality dataset.
pub const EMBEDDED_PERSONALITY: &[u8] = include_bytes!("../../data/randomizer.json");

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse {dataset} data: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to read {dataset} data from {}: {source}", .path.display())]
    Io {
        dataset: Dataset,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a dataset's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded(&'static [u8]),
    File(PathBuf),
}

impl DatasetSource {
    fn read(&self, dataset: Dataset) -> Result<Cow<'static, [u8]>, LoadError> {
        match self {
            DatasetSource::Embedded(bytes) => Ok(Cow::Borrowed(bytes)),
            DatasetSource::File(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|source| LoadError::Io {
                    dataset,
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Sources for both datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSources {
    pub names: DatasetSource,
    pub personality: DatasetSource,
}

impl DatasetSources {
    /// The copies compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            names: DatasetSource::Embedded(EMBEDDED_NAMES),
            personality: DatasetSource::Embedded(EMBEDDED_PERSONALITY),
        }
    }

    /// Bundled copies, replaced by any override paths in the config.
    pub fn from_config(config: &AppConfig) -> Self {
        let embedded = Self::embedded();
        Self {
            names: config
                .names_data_path
                .clone()
                .map_or(embedded.names, DatasetSource::File),
            personality: config
                .personality_data_path
                .clone()
                .map_or(embedded.personality, DatasetSource::File),
        }
    }
}

impl Default for DatasetSources {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Parse the names dataset.
pub fn load_names(bytes: &[u8]) -> Result<Names, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        dataset: Dataset::Names,
        source,
    })
}

/// Parse the personality dataset.
pub fn load_personality(bytes: &[u8]) -> Result<PersonalityCatalog, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        dataset: Dataset::Personality,
        source,
    })
}

/// Both datasets, immutable for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datasets {
    names: Names,
    personality: PersonalityCatalog,
}

impl Datasets {
    pub fn from_parts(names: Names, personality: PersonalityCatalog) -> Self {
        Self { names, personality }
    }

    /// Parse both datasets, failing on the first malformed source.
    pub fn load(names: &[u8], personality: &[u8]) -> Result<Self, LoadError> {
        Ok(Self {
            names: load_names(names)?,
            personality: load_personality(personality)?,
        })
    }

    /// Startup path: load each dataset independently, leaving any that fail empty.
    pub fn load_or_degrade(sources: &DatasetSources) -> Self {
        let names = sources
            .names
            .read(Dataset::Names)
            .and_then(|bytes| load_names(&bytes))
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Names dataset unavailable, continuing with empty names");
                Names::default()
            });

        let personality = sources
            .personality
            .read(Dataset::Personality)
            .and_then(|bytes| load_personality(&bytes))
            .unwrap_or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Personality dataset unavailable, continuing with empty catalog"
                );
                PersonalityCatalog::default()
            });

        tracing::info!(
            male_first_names = names.male_first_names.len(),
            female_first_names = names.female_first_names.len(),
            last_names = names.last_names.len(),
            personality_types = personality.personality_types.len(),
            alignments = personality.alignments.len(),
            "Datasets loaded"
        );

        Self { names, personality }
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn personality(&self) -> &PersonalityCatalog {
        &self.personality
    }
}
