//! Application configuration

use std::env;
use std::path::PathBuf;

/// Port the HTTP server listens on. Not configurable.
pub const SERVER_PORT: u16 = 8080;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "charforge_engine=debug,tower_http=debug";

/// Application configuration loaded from environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Read the names dataset from this file instead of the bundled copy
    pub names_data_path: Option<PathBuf>,
    /// Read the personality dataset from this file instead of the bundled copy
    pub personality_data_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        Self {
            names_data_path: path("NAMES_DATA_PATH"),
            personality_data_path: path("PERSONALITY_DATA_PATH"),
        }
    }
}
