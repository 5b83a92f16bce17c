//! Injected, seedable RNG.
//!
//! Every sampling and arrival operation takes a `&mut WanderRng` instead of
//! reaching for an ambient global generator, so a run is fully reproducible
//! from its seed.
//!
//! Agents get independent streams seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG handed to area sampling and arrival logic.
///
/// `Clone` copies the stream state, which lets tests replay a draw.
#[derive(Clone, Debug)]
pub struct WanderRng(SmallRng);

impl WanderRng {
    pub fn new(seed: u64) -> Self {
        WanderRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn for_agent(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        WanderRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f32` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform `f32` in `[-half, +half]`; `0.0` when `half` is zero.
    #[inline]
    pub fn symmetric(&mut self, half: f32) -> f32 {
        if half > 0.0 {
            self.gen_range(-half..=half)
        } else {
            0.0
        }
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
