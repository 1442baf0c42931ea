//! Random source consumed by mob goals.
//!
//! Goals draw their jitter (recompute delays, opportunistic recomputes)
//! through the [`MobRandom`] trait so hosts can plug in their own generator.
//! [`PcgRandom`] is a seeded, deterministic implementation suitable for
//! replays and tests.

use crate::EntityId;

/// Uniform random draws used by goals.
pub trait MobRandom {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[0, bound)`. Returns 0 when `bound <= 0`.
    fn next_int(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        // Multiply-shift maps the 32-bit draw onto [0, bound).
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as i32
    }

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit LCG state, 32-bit output.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same stream
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// Stream for one mob, derived from the world seed.
    pub fn for_entity(world_seed: u64, entity: EntityId) -> Self {
        Self::seeded(seed_for(world_seed, entity))
    }

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl MobRandom for PcgRandom {
    fn next_u32(&mut self) -> u32 {
        let output = Self::pcg_output(self.state);
        self.state = Self::pcg_step(self.state);
        output
    }
}

/// Derive a per-entity seed from the world seed.
///
/// Mixes both inputs with SplitMix64-style multipliers and a final
/// avalanche so neighbouring entity ids get unrelated streams.
pub fn seed_for(world_seed: u64, entity: EntityId) -> u64 {
    let mut hash = world_seed;
    hash ^= u64::from(entity.0).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
