//! # binwatch Library
//!
//! This library exposes the binwatch modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod logging;

// Re-export binwatch_core for convenience
pub use binwatch_core;
