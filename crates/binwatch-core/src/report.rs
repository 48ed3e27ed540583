//! # Collection Report
//!
//! The result of a simulation run: every bin's status plus the bins flagged
//! for collection. Serializable for `--report json`, renderable as a text table.

use crate::fleet::Fleet;
use crate::selector::select_for_collection;
use crate::smart_bin::{BinId, BinStatus};
use serde::{Deserialize, Serialize};

/// Snapshot of a fleet against a collection threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionReport {
    /// Threshold the selection was made with.
    pub threshold: u8,
    /// Status of every bin, in id order.
    pub bins: Vec<BinStatus>,
    /// Bins at or above the threshold.
    pub to_collect: Vec<BinId>,
}

impl CollectionReport {
    /// Build a report from the current state of `fleet`.
    #[must_use]
    pub fn from_fleet(fleet: &Fleet, threshold: u8) -> Self {
        Self::from_statuses(fleet.statuses(), threshold)
    }

    #[must_use]
    pub fn from_statuses(bins: Vec<BinStatus>, threshold: u8) -> Self {
        let to_collect = select_for_collection(&bins, threshold);
        Self {
            threshold,
            bins,
            to_collect,
        }
    }

    /// Check if at least one bin is flagged for pickup.
    #[must_use]
    pub fn has_pickups(&self) -> bool {
        !self.to_collect.is_empty()
    }

    /// Format as plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("┌─────────────────────────────────────┐\n");
        output.push_str("│ BIN STATUS                          │\n");

        if self.bins.is_empty() {
            output.push_str("│ - (none)                            │\n");
        } else {
            for status in &self.bins {
                let marker = if self.to_collect.contains(&status.bin_id) {
                    " *"
                } else {
                    ""
                };
                output.push_str(&format!("│ - {status}{marker}\n"));
            }
        }

        output.push_str("├─────────────────────────────────────┤\n");
        output.push_str(&format!(
            "│ TO COLLECT (threshold {}%)\n",
            self.threshold
        ));

        if self.to_collect.is_empty() {
            output.push_str("│ - (none)                            │\n");
        } else {
            let ids = self
                .to_collect
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("│ - [{ids}]\n"));
        }

        output.push_str("└─────────────────────────────────────┘\n");

        output
    }
}

// =============================================================================
// TESTS
// =============================================================================
