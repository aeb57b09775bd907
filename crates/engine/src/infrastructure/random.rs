//! Random implementations.

use rand::Rng;

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
///
/// Backed by `rand::thread_rng()`, which keeps one OS-seeded generator per
/// thread, so concurrent requests never share generator state.
#[derive(Debug, Clone, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for SystemRandom {
    fn gen_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn gen_bool(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

/// Fixed random for testing.
///
/// Always answers with the same index (clamped into range) and coin flip.
#[cfg(test)]
pub struct FixedRandom {
    pub index: usize,
    pub flip: bool,
}

#[cfg(test)]
impl FixedRandom {
    pub fn new(index: usize, flip: bool) -> Self {
        Self { index, flip }
    }
}

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_index(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn gen_bool(&self) -> bool {
        self.flip
    }
}
