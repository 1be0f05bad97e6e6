//! # Unit Tests
//!
//! Fine-grained tests for the individual simulator components.


/// Tests for the CPU core: register file, arithmetic/logic execution,
/// control transfers, and load/store.
pub mod core;


/// Tests for the flat memory image.
pub mod mem;
