//! RNG module - random source for tile spawning
//!
//! The engine never touches global randomness. Every [`Game`](crate::Game) owns a
//! [`TileRng`], which defaults to [`SimpleRng`], a seeded LCG, so the same seed
//! always produces the same sequence of spawns. Tests can plug in their own
//! implementation to script exact spawn positions.

/// Source of randomness for spawning tiles
pub trait TileRng {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses multiply-shift reduction so the result comes from the high bits of
    /// `next_u32`; the low bits of an LCG cycle with a short period.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with max = 0");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Return true with the given percent probability
    fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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

    /// Current internal state (feed back into `new` to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl TileRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
