//! # Collection Selector
//!
//! Picks the bins that are due for collection.

use crate::smart_bin::{BinId, BinStatus};

/// Whether a bin has reached the collection threshold.
#[must_use]
pub fn needs_collection(status: &BinStatus, threshold: u8) -> bool {
    status.current_fill >= threshold
}

/// Identifiers of all bins whose fill level is at or above `threshold`.
///
/// Input order is preserved.
#[must_use]
pub fn select_for_collection(statuses: &[BinStatus], threshold: u8) -> Vec<BinId> {
    statuses
        .iter()
        .filter(|status| needs_collection(status, threshold))
        .map(|status| status.bin_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smart_bin::{BIN_CAPACITY, Location};

    fn statuses(fills: &[u8]) -> Vec<BinStatus> {
        fills
            .iter()
            .enumerate()
            .map(|(i, &fill)| BinStatus {
                bin_id: BinId(i as u64),
                location: Location::new(0.0, 0.0),
                current_fill: fill,
                capacity: BIN_CAPACITY,
            })
            .collect()
    }

    #[test]
    fn selects_at_or_above_threshold() {
        let bins = statuses(&[10, 80, 75, 99, 0]);
        assert_eq!(
            select_for_collection(&bins, 75),
            vec![BinId(1), BinId(2), BinId(3)]
        );
    }

    #[test]
    fn zero_threshold_selects_everything() {
        let bins = statuses(&[0, 50, 100]);
        assert_eq!(select_for_collection(&bins, 0).len(), 3);
    }

    #[test]
    fn full_threshold_selects_only_full_bins() {
        let bins = statuses(&[99, 100, 100]);
        assert_eq!(select_for_collection(&bins, 100), vec![BinId(1), BinId(2)]);
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select_for_collection(&[], 75).is_empty());
    }
}
