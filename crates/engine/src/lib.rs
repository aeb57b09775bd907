//! Charforge Engine library.
//!
//! HTTP service that hands out randomly generated characters.
//!
//! ## Structure
//!
//! - `infrastructure/` - Dataset loading, configuration, randomness (ports + adapters)
//! - `use_cases/` - Name, personality and character generation
//! - `api/` - HTTP entry points and CORS policy
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for unit and HTTP tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
