//! Shared random source and selection primitives
//!
//! Every generator takes an [`Entropy`] handle as an explicit dependency, so
//! call sites stay testable and deterministic under a fixed seed. The handle
//! is internally synchronized and can be shared across threads.

use parking_lot::Mutex;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{FixtureForgeError, Result};

/// Process-wide random source for all generators
pub struct Entropy {
    rng: Mutex<SmallRng>,
}

impl Entropy {
    /// Create a source seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Create a deterministic source from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        tracing::debug!(seed, "creating seeded entropy source");
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Pick one item uniformly at random from a lookup table
    ///
    /// An empty table is a data-layer defect and fails loudly instead of
    /// returning a default. `name` identifies the broken table in the error.
    pub fn pick<'a, T>(&self, name: &str, table: &'a [T]) -> Result<&'a T> {
        if table.is_empty() {
            return Err(FixtureForgeError::empty_table(name));
        }
        let index = self.rng.lock().gen_range(0..table.len());
        Ok(&table[index])
    }

    /// Pick one entry with probability proportional to its weight
    ///
    /// Errors if the input is empty or all weights are zero.
    pub fn pick_weighted<'a, T>(&self, name: &str, entries: &'a [(T, u32)]) -> Result<&'a T> {
        let total: u64 = entries.iter().map(|(_, weight)| u64::from(*weight)).sum();
        if total == 0 {
            return Err(FixtureForgeError::empty_table(name));
        }

        let mut remaining = self.rng.lock().gen_range(0..total);
        for (item, weight) in entries {
            let weight = u64::from(*weight);
            if remaining < weight {
                return Ok(item);
            }
            remaining -= weight;
        }

        // Unreachable: remaining < total and the weights sum to total.
        Err(FixtureForgeError::empty_table(name))
    }

    /// Return an integer uniformly distributed over `[min, max]` inclusive
    pub fn integer<T>(&self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.lock().gen_range(min..=max)
    }

    /// Return `true` with the given probability
    pub fn chance(&self, probability: f64) -> bool {
        self.rng.lock().gen_bool(probability)
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::new()
    }
}
