//! RNG module - pin-count sources for rolls
//!
//! The core never decides how many pins fall. It asks a [`PinRoll`] source,
//! which must return a count in `[0, pins_standing]`. Two sources ship here:
//!
//! - [`SeededRolls`]: uniform pin counts from a seeded LCG, so the same seed
//!   replays the same game
//! - [`ScriptedRolls`]: a fixed sequence, for tests and replays
//!
//! Any `FnMut(u8) -> Option<u8>` closure is also a source.

use std::collections::VecDeque;

/// Source of pin counts for individual rolls.
pub trait PinRoll {
    /// Pins knocked down with `pins_standing` pins on the deck.
    ///
    /// Returns `None` when the source has no more rolls to give.
    fn roll(&mut self, pins_standing: u8) -> Option<u8>;
}

impl<F> PinRoll for F
where
    F: FnMut(u8) -> Option<u8>,
{
    fn roll(&mut self, pins_standing: u8) -> Option<u8> {
        self(pins_standing)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max]
    pub fn next_inclusive(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % (max + 1)
    }

    /// Current RNG state (reseeding with it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniformly random pin counts drawn from a seeded [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct SeededRolls {
    seed: u32,
    rng: SimpleRng,
}

impl SeededRolls {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SeededRolls {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PinRoll for SeededRolls {
    fn roll(&mut self, pins_standing: u8) -> Option<u8> {
        Some(self.rng.next_inclusive(pins_standing as u32) as u8)
    }
}

/// Replays a fixed sequence of pin counts, one per roll.
///
/// The values are handed out as-is; range checking is the frame engine's job.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<u8>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls not yet handed out
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl PinRoll for ScriptedRolls {
    fn roll(&mut self, _pins_standing: u8) -> Option<u8> {
        self.rolls.pop_front()
    }
}
