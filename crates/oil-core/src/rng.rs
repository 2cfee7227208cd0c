//! Deterministic per-station RNG.
//!
//! # Determinism strategy
//!
//! Each producing station gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (station_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive station IDs uniformly across the seed space.
//! This means:
//!
//! - Stations never share RNG state, so the order in which the registry
//!   updates them cannot change what each one samples.
//! - Re-running a scenario with the same global seed reproduces every
//!   production draw exactly.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::StationId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── StationRng ────────────────────────────────────────────────────────────────

/// Per-station deterministic RNG.
///
/// Create one per producing station at simulation init.  The type is `!Sync`
/// to prevent accidental sharing — each station owns exactly one.
#[derive(Debug)]
pub struct StationRng(SmallRng);

impl StationRng {
    /// Seed deterministically from the run's global seed and a station ID.
    pub fn new(global_seed: u64, station: StationId) -> Self {
        let seed = global_seed ^ (station.0 as u64).wrapping_mul(MIXING_CONSTANT);
        StationRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`dist.sample(rng.inner())`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Draw from `dist` and truncate toward zero, the way integer volumes
    /// are sampled from the per-tick production distribution.
    #[inline]
    pub fn sample_volume(&mut self, dist: &Normal<f64>) -> i64 {
        dist.sample(&mut self.0) as i64
    }
}
