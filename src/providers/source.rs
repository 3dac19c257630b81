//! Enemy action sources

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::combat::Action;

/// Chooses the enemy's action each turn
///
/// The real game draws uniformly from an RNG; tests substitute a scripted
/// source for full determinism.
pub trait EnemyActionSource {
    fn next_action(&mut self) -> Action;
}

/// Uniform random choice over attack/defend/buff
pub struct RandomActionSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomActionSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomActionSource<StdRng> {
    /// Seeded source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// OS-entropy source for interactive play
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> EnemyActionSource for RandomActionSource<R> {
    fn next_action(&mut self) -> Action {
        Action::random(&mut self.rng)
    }
}

/// Deterministic source fed a fixed action sequence
///
/// Falls back to `Attack` once the script runs out.
pub struct ScriptedActionSource {
    script: VecDeque<Action>,
}

impl ScriptedActionSource {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { script: actions.into_iter().collect() }
    }
}

impl EnemyActionSource for ScriptedActionSource {
    fn next_action(&mut self) -> Action {
        self.script.pop_front().unwrap_or(Action::Attack)
    }
}
