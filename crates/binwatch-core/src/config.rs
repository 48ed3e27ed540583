//! # Simulation Config
//!
//! Parameters of a simulation run. The defaults reproduce the reference run:
//! ten bins, a 75% collection threshold and an unseeded PRNG.

use crate::error::ConfigError;
use crate::smart_bin::BIN_CAPACITY;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Default number of simulated bins.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Largest fleet a simulation accepts.
pub const MAX_BIN_COUNT: usize = 1_000_000;

/// Default collection threshold, in percent.
pub const DEFAULT_THRESHOLD: u8 = 75;

/// Configuration of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of bins to create.
    pub bin_count: usize,
    /// Bins at or above this fill level are flagged for collection.
    pub threshold: u8,
    /// Seed for the PRNG. If undefined, the run is non-deterministic and uses OS entropy.
    pub prng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            threshold: DEFAULT_THRESHOLD,
            prng_seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check the config before running a simulation with it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold > BIN_CAPACITY {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        if self.bin_count == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        if self.bin_count > MAX_BIN_COUNT {
            return Err(ConfigError::TooManyBins(self.bin_count));
        }
        Ok(())
    }

    /// Build the PRNG for this run.
    ///
    /// SmallRng is a fast, non-cryptographic PRNG; that is all a simulation needs.
    #[must_use]
    pub fn rng(&self) -> SmallRng {
        match self.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}
