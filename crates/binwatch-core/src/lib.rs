//! # binwatch-core
//!
//! Simulation engine for a smart-bin monitoring backend.
//!
//! The crate models bins with a validated fill level, feeds them readings
//! from a [`FillSensor`], and selects the bins that need collection.
//!
//! ```text
//! SimulationConfig ──► Fleet::generate ──► Fleet::run_pass(sensor)
//!                                               │
//!                                               ▼
//!                         select_for_collection(statuses, threshold)
//!                                               │
//!                                               ▼
//!                                       CollectionReport
//! ```
//!
//! Nothing here touches the filesystem or the network. Logging goes through
//! the `tracing` facade; the binary decides where it ends up.

pub mod config;
pub mod error;
pub mod fleet;
pub mod report;
pub mod selector;
pub mod sensor;
pub mod smart_bin;

pub use config::SimulationConfig;
pub use error::{BinError, ConfigError};
pub use fleet::{Fleet, PassSummary};
pub use report::CollectionReport;
pub use selector::{needs_collection, select_for_collection};
pub use sensor::{FillSensor, RandomSensor, ScriptedSensor};
pub use smart_bin::{BIN_CAPACITY, BinId, BinStatus, Location, SmartBin};
