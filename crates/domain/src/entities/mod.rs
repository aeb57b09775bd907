//! Static datasets loaded once at startup.

pub mod names;
pub mod personality;

pub use names::Names;
pub use personality::{PersonalityCatalog, PersonalityType};
