//! Percentile dice for every chance event in the game.
//!
//! All randomness goes through [`RandomSource`], so a session can be
//! replayed from a seed or driven by a fixed script in tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of percentile rolls.
pub trait RandomSource {
    /// Roll a value in `1..=100`.
    fn roll(&mut self) -> u32;

    /// Roll and report whether an event with `percent` chance happens.
    ///
    /// The event fires when the roll lands in the top `percent` values, so
    /// a roll of 100 makes every chance fire and a roll of 1 makes every
    /// chance below 100 fail.
    fn chance(&mut self, percent: u32) -> bool {
        self.roll() > 100 - percent.min(100)
    }
}

/// Seeded pseudo-random rolls. The same seed gives the same game.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    /// Create a source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn roll(&mut self) -> u32 {
        self.rng.random_range(1..=100)
    }
}

/// Always rolls the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(u32);

impl FixedSource {
    /// Create a source that always rolls `value`, clamped to `1..=100`.
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }
}

impl RandomSource for FixedSource {
    fn roll(&mut self) -> u32 {
        self.0
    }
}

/// Plays back a queue of rolls, then repeats a fallback value.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    rolls: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedSource {
    /// Create a source from a script and a fallback roll.
    pub fn new(rolls: impl IntoIterator<Item = u32>, fallback: u32) -> Self {
        Self {
            rolls: rolls.into_iter().map(|r| r.clamp(1, 100)).collect(),
            fallback: fallback.clamp(1, 100),
        }
    }

    /// Rolls not yet played back.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedSource {
    fn roll(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}
