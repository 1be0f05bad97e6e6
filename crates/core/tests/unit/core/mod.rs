//! CPU core tests.

/// Arithmetic, logic, and comparison execution.
pub mod arithmetic;
