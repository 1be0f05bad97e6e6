//! Common types shared throughout the simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Word size and register-file geometry.
//! 2. **Error Handling:** The [`SimError`] taxonomy covering load, decode,
//!    execute, memory, and console failures.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for load, decode, execute, memory, and console failures.
pub mod error;

pub use constants::{NUM_GPRS, WORD_SIZE};
pub use error::SimError;
