//! Port traits for dependencies that tests need to replace.

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of uniform randomness.
///
/// Implementations must be safe to call from many request tasks at once.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn gen_index(&self, len: usize) -> usize;

    /// Fair coin flip.
    fn gen_bool(&self) -> bool;
}
