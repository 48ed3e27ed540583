//! # Error Types
//!
//! Domain and configuration errors for binwatch-core.

use thiserror::Error;

/// Errors raised by a bin record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BinError {
    /// A fill level outside `0..=100` was rejected.
    #[error("fill level {0} out of valid range 0..=100")]
    InvalidFillLevel(i64),
}

/// Errors raised when validating a [`crate::SimulationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The collection threshold is above 100.
    #[error("threshold {0} out of valid range 0..=100")]
    ThresholdOutOfRange(u8),

    /// A simulation needs at least one bin.
    #[error("bin count must be at least 1")]
    EmptyFleet,

    /// The bin count is above [`crate::config::MAX_BIN_COUNT`].
    #[error("bin count {0} exceeds the maximum of {max}", max = crate::config::MAX_BIN_COUNT)]
    TooManyBins(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fill_message_names_value() {
        let err = BinError::InvalidFillLevel(-3);
        assert_eq!(err.to_string(), "fill level -3 out of valid range 0..=100");
    }

    #[test]
    fn config_error_messages() {
        assert!(
            ConfigError::ThresholdOutOfRange(101)
                .to_string()
                .contains("101")
        );
        assert!(ConfigError::EmptyFleet.to_string().contains("at least 1"));
        assert_eq!(
            ConfigError::TooManyBins(2_000_000).to_string(),
            "bin count 2000000 exceeds the maximum of 1000000"
        );
    }
}
