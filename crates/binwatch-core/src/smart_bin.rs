//! # Bin Record
//!
//! A single smart bin: identifier, location, fixed capacity and a fill level
//! that is guaranteed to stay within `0..=100`.

use crate::error::BinError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Capacity of every bin, in percent.
pub const BIN_CAPACITY: u8 = 100;

/// Latitude bounds used for random placement.
pub const LATITUDE_MIN: f64 = -90.0;
/// Upper latitude bound.
pub const LATITUDE_MAX: f64 = 90.0;
/// Longitude bounds used for random placement.
pub const LONGITUDE_MIN: f64 = -180.0;
/// Upper longitude bound.
pub const LONGITUDE_MAX: f64 = 180.0;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier of a bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BinId(pub u64);

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic position of a bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Draw a location uniformly over the whole globe.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            latitude: rng.random_range(LATITUDE_MIN..=LATITUDE_MAX),
            longitude: rng.random_range(LONGITUDE_MIN..=LONGITUDE_MAX),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

// =============================================================================
// STATUS SNAPSHOT
// =============================================================================

/// Read-only snapshot of a bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinStatus {
    pub bin_id: BinId,
    pub location: Location,
    /// Fill level in percent, always within `0..=capacity`.
    pub current_fill: u8,
    pub capacity: u8,
}

impl fmt::Display for BinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bin {} at {}: {}% of {}%",
            self.bin_id, self.location, self.current_fill, self.capacity
        )
    }
}

// =============================================================================
// SMART BIN
// =============================================================================

/// A monitored bin.
///
/// The fill level starts at 0 and only changes through [`SmartBin::update_fill`],
/// which rejects anything outside `0..=100`.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartBin {
    id: BinId,
    location: Location,
    current_fill: u8,
}

impl SmartBin {
    /// Create an empty bin.
    #[must_use]
    pub fn new(id: BinId, location: Location) -> Self {
        Self {
            id,
            location,
            current_fill: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> BinId {
        self.id
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Current fill level in percent.
    #[must_use]
    pub fn fill(&self) -> u8 {
        self.current_fill
    }

    #[must_use]
    pub fn capacity(&self) -> u8 {
        BIN_CAPACITY
    }

    /// Snapshot the current state.
    #[must_use]
    pub fn status(&self) -> BinStatus {
        BinStatus {
            bin_id: self.id,
            location: self.location,
            current_fill: self.current_fill,
            capacity: BIN_CAPACITY,
        }
    }

    /// Set the fill level.
    ///
    /// Returns [`BinError::InvalidFillLevel`] for values outside `0..=100`;
    /// the stored level is left untouched in that case.
    pub fn update_fill(&mut self, fill_level: i64) -> Result<(), BinError> {
        let fill = u8::try_from(fill_level)
            .ok()
            .filter(|fill| *fill <= BIN_CAPACITY)
            .ok_or(BinError::InvalidFillLevel(fill_level))?;

        self.current_fill = fill;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
