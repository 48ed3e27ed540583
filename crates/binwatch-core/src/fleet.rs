//! # Fleet
//!
//! The set of monitored bins and the simulation pass that feeds them readings.
//!
//! A rejected reading never aborts a pass: it is logged where it happens and
//! the bin keeps its previous fill level.

use crate::sensor::FillSensor;
use crate::smart_bin::{BinId, BinStatus, Location, SmartBin};
use rand::Rng;

/// Outcome counters for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Readings accepted by their bin.
    pub updated: usize,
    /// Readings rejected as out of range.
    pub rejected: usize,
    /// Bins for which the sensor had no reading.
    pub skipped: usize,
}

impl PassSummary {
    /// Total number of bins visited.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.updated + self.rejected + self.skipped
    }
}

/// All bins under simulation, kept in id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fleet {
    bins: Vec<SmartBin>,
}

impl Fleet {
    /// Wrap existing bins. They are sorted by id.
    #[must_use]
    pub fn new(mut bins: Vec<SmartBin>) -> Self {
        bins.sort_by_key(SmartBin::id);
        Self { bins }
    }

    /// Create `count` empty bins with ids `0..count` at random locations.
    ///
    /// The count is not bounded here; [`crate::SimulationConfig::validate`]
    /// caps it at [`crate::config::MAX_BIN_COUNT`].
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let bins = (0..count as u64)
            .map(|id| SmartBin::new(BinId(id), Location::random(rng)))
            .collect();
        Self { bins }
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the fleet has no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Look up a bin by id.
    #[must_use]
    pub fn get(&self, id: BinId) -> Option<&SmartBin> {
        self.bins
            .binary_search_by_key(&id, SmartBin::id)
            .ok()
            .map(|idx| &self.bins[idx])
    }

    /// Iterate bins in id order.
    pub fn bins(&self) -> impl Iterator<Item = &SmartBin> {
        self.bins.iter()
    }

    /// Snapshots of every bin, in id order.
    #[must_use]
    pub fn statuses(&self) -> Vec<BinStatus> {
        self.bins.iter().map(SmartBin::status).collect()
    }

    /// Feed one reading from `sensor` into every bin.
    pub fn run_pass<S: FillSensor + ?Sized>(&mut self, sensor: &mut S) -> PassSummary {
        let mut summary = PassSummary::default();

        for bin in &mut self.bins {
            let Some(reading) = sensor.read_fill(bin.id()) else {
                tracing::warn!("No reading for bin {}, keeping {}%.", bin.id(), bin.fill());
                summary.skipped += 1;
                continue;
            };

            match bin.update_fill(reading) {
                Ok(()) => {
                    tracing::info!("Updated bin {} fill level to {}%.", bin.id(), bin.fill());
                    summary.updated += 1;
                }
                Err(e) => {
                    tracing::error!("Error updating fill level of bin {}: {e}", bin.id());
                    summary.rejected += 1;
                }
            }
        }

        summary
    }
}

// =============================================================================
// TESTS
// =============================================================================
