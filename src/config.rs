//! Shared solver configuration: operation budget and randomness.

use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::capper::OperationCapper;

/// Bundles the operation capper with the solver's random generator.
///
/// A single `SsspConfig` is threaded by mutable reference through the entire
/// call tree, so every primitive draws from one RNG stream and accounts
/// against one budget. Two runs with the same seed and a sufficient budget
/// make the same random choices.
#[derive(Debug, Clone)]
pub struct SsspConfig {
    pub capper: OperationCapper,
    pub rng: Pcg64,
}

impl SsspConfig {
    /// Configuration without an operation budget.
    pub fn trivial(seed: u64) -> Self {
        SsspConfig {
            capper: OperationCapper::nocap(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Configuration with a bounded operation budget.
    pub fn capped(budget: usize, seed: u64) -> Self {
        SsspConfig {
            capper: OperationCapper::capped(budget),
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}
