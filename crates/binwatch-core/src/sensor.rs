//! # Fill Sensors
//!
//! Sources of raw fill-level readings.
//!
//! Readings are plain integers and are NOT validated here; range checking is
//! the bin's job (see [`crate::SmartBin::update_fill`]).

use crate::smart_bin::BinId;
use rand::Rng;
use std::collections::VecDeque;

/// Highest fill level a [`RandomSensor`] produces.
pub const MAX_READING: i64 = 100;

// =============================================================================
// FILLSENSOR TRAIT
// =============================================================================

/// A source of fill-level readings.
pub trait FillSensor {
    /// Read the fill level for `bin`.
    ///
    /// Returns `None` when the sensor has no reading for this bin.
    fn read_fill(&mut self, bin: BinId) -> Option<i64>;
}

// =============================================================================
// RANDOM SENSOR
// =============================================================================

/// Simulated sensor drawing readings uniformly from `0..=100`.
#[derive(Debug, Clone)]
pub struct RandomSensor<R> {
    rng: R,
}

impl<R: Rng> RandomSensor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FillSensor for RandomSensor<R> {
    fn read_fill(&mut self, _bin: BinId) -> Option<i64> {
        Some(self.rng.random_range(0..=MAX_READING))
    }
}

// =============================================================================
// SCRIPTED SENSOR
// =============================================================================

/// Replays a fixed list of readings, one per call, in order.
///
/// Once the list is exhausted every further read returns `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    readings: VecDeque<i64>,
}

impl ScriptedSensor {
    pub fn new(readings: impl IntoIterator<Item = i64>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
        }
    }

    /// Number of readings not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl FillSensor for ScriptedSensor {
    fn read_fill(&mut self, _bin: BinId) -> Option<i64> {
        self.readings.pop_front()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_readings_stay_in_range() {
        let mut sensor = RandomSensor::new(SmallRng::seed_from_u64(42));
        for i in 0..1000 {
            let reading = sensor.read_fill(BinId(i));
            assert!(matches!(reading, Some(0..=MAX_READING)));
        }
    }

    #[test]
    fn random_sensor_is_reproducible() {
        let mut a = RandomSensor::new(SmallRng::seed_from_u64(7));
        let mut b = RandomSensor::new(SmallRng::seed_from_u64(7));
        let from_a: Vec<_> = (0..20).map(|i| a.read_fill(BinId(i))).collect();
        let from_b: Vec<_> = (0..20).map(|i| b.read_fill(BinId(i))).collect();
        assert_eq!(from_a, from_b);
    }

    #[test]
    fn scripted_sensor_replays_then_runs_dry() {
        let mut sensor = ScriptedSensor::new([10, -5, 250]);
        assert_eq!(sensor.remaining(), 3);
        assert_eq!(sensor.read_fill(BinId(0)), Some(10));
        assert_eq!(sensor.read_fill(BinId(1)), Some(-5));
        assert_eq!(sensor.read_fill(BinId(2)), Some(250));
        assert_eq!(sensor.read_fill(BinId(3)), None);
        assert_eq!(sensor.remaining(), 0);
    }
}
