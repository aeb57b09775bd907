//! Infrastructure implementations.
//!
//! Contains port trait implementations and startup-time loading.

pub mod config;
pub mod datasets;
pub mod ports;
pub mod random;
