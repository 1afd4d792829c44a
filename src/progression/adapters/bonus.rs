//! Point bonus sources backed by `rand` or a fixed value.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::progression::ports::{MAX_POINT_BONUS, PointBonus};

/// Draws bonuses uniformly from `0..=MAX_POINT_BONUS`.
#[derive(Debug, Clone)]
pub struct RngPointBonus<R> {
    rng: R,
}

impl<R: Rng> RngPointBonus<R> {
    /// Wraps an existing random number generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPointBonus<ThreadRng> {
    /// Uses the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngPointBonus<StdRng> {
    /// Uses a reproducible generator seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PointBonus for RngPointBonus<R> {
    fn next_bonus(&mut self) -> u32 {
        self.rng.random_range(0..=MAX_POINT_BONUS)
    }
}

/// Always returns the same bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPointBonus(pub u32);

impl PointBonus for FixedPointBonus {
    fn next_bonus(&mut self) -> u32 {
        self.0
    }
}
